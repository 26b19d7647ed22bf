use clap::Parser;
use grounds::{
    KnowledgeBase, Result,
    cli::{Cli, Command, FilterArgs, GetArgs, ListArgs, SearchArgs, SimilarArgs, TitleArgs},
    document::Document,
    error::Error,
    search,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("GROUNDS_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let kb = KnowledgeBase::open(&cli.corpus);

    match cli.command {
        Command::Search(args) => cmd_search(&kb, &args),
        Command::Get(args) => cmd_get(&kb, &args),
        Command::Title(args) => cmd_title(&kb, &args),
        Command::Similar(args) => cmd_similar(&kb, &args),
        Command::Topics(args) => cmd_topics(&kb, &args),
        Command::Tags(args) => cmd_tags(&kb, &args),
        Command::Topic(args) => cmd_topic(&kb, &args),
        Command::Tag(args) => cmd_tag(&kb, &args),
        Command::Status(args) => cmd_status(&kb, &args),
        Command::Completions(_) => unreachable!("handled above"),
    }
}

fn cmd_search(kb: &KnowledgeBase, args: &SearchArgs) -> Result<()> {
    let hits = kb.search(&args.query, args.count, args.min_score);

    if args.json {
        search::format_json(&hits, &args.query);
    } else if args.files {
        search::format_files(&hits);
    } else {
        search::format_human(&hits, &args.query);
    }
    Ok(())
}

fn cmd_get(kb: &KnowledgeBase, args: &GetArgs) -> Result<()> {
    let doc = kb.get(&args.id).ok_or_else(|| Error::NotFound {
        kind: "document",
        name: args.id.clone(),
    })?;
    print_document(&doc, args.json)
}

fn cmd_title(kb: &KnowledgeBase, args: &TitleArgs) -> Result<()> {
    let doc = kb.find_by_title(&args.title).ok_or_else(|| Error::NotFound {
        kind: "document",
        name: args.title.clone(),
    })?;
    print_document(&doc, args.json)
}

fn print_document(doc: &Document, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(doc)?);
    } else {
        print!("{}", doc.body);
        if !doc.body.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn cmd_similar(kb: &KnowledgeBase, args: &SimilarArgs) -> Result<()> {
    // Distinguish an unknown id from a document with no neighbors.
    if kb.get(&args.id).is_none() {
        return Err(Error::NotFound {
            kind: "document",
            name: args.id.clone(),
        });
    }

    let docs = kb.similar_to(&args.id, args.count);
    if args.json {
        print_document_list(&docs)?;
    } else if docs.is_empty() {
        println!("No similar documents.");
    } else {
        for doc in &docs {
            println!("{}\t{}", doc.id, doc.title);
        }
    }
    Ok(())
}

fn cmd_topics(kb: &KnowledgeBase, args: &ListArgs) -> Result<()> {
    print_string_list(&kb.topics(), args.json)
}

fn cmd_tags(kb: &KnowledgeBase, args: &ListArgs) -> Result<()> {
    print_string_list(&kb.tags(), args.json)
}

fn cmd_topic(kb: &KnowledgeBase, args: &FilterArgs) -> Result<()> {
    let docs = kb.find_by_topic(&args.name, args.count);
    print_filtered(&docs, &args.name, args.json)
}

fn cmd_tag(kb: &KnowledgeBase, args: &FilterArgs) -> Result<()> {
    let docs = kb.find_by_tag(&args.name, args.count);
    print_filtered(&docs, &args.name, args.json)
}

fn cmd_status(kb: &KnowledgeBase, args: &ListArgs) -> Result<()> {
    let count = kb.refresh()?;
    let topics = kb.topics();
    let tags = kb.tags();

    if args.json {
        let payload = serde_json::json!({
            "corpus": kb.root().display().to_string(),
            "documents": count,
            "topics": topics.len(),
            "tags": tags.len(),
        });
        println!("{payload}");
    } else {
        println!("Corpus directory: {}", kb.root().display());
        println!("Documents: {count}");
        println!("Topics: {}", topics.len());
        println!("Tags: {}", tags.len());
    }
    Ok(())
}

fn print_string_list(items: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(items)?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}

fn print_document_list(docs: &[Document]) -> Result<()> {
    println!("{}", serde_json::to_string(docs)?);
    Ok(())
}

fn print_filtered(docs: &[Document], name: &str, json: bool) -> Result<()> {
    if json {
        print_document_list(docs)?;
    } else if docs.is_empty() {
        println!("No documents match '{name}'.");
    } else {
        for doc in docs {
            println!("{}\t{}", doc.id, doc.title);
        }
    }
    Ok(())
}
