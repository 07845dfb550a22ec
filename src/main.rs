use anyhow::Result;
use clap::Parser;
use dnsq::args::Args;
use dnsq::config::load_config;
use dnsq::context::Context;
use dnsq::encode;
use dnsq::util::to_hex;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        error!("{:#}", err);

        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?.apply_args(&args);
    let ctx = Context::from(&cfg)?;

    let query = ctx.query.clone().build(&args.domain)?;
    println!("{}", to_hex(&encode(&query)));

    info!("Resolving {} via {}", query.question().name, ctx);
    let res = ctx.resolver().resolve(&query)?;

    println!("{} {}", res.id(), query.id());
    println!("{}", res);

    Ok(())
}
