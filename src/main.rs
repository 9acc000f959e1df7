use colored::*;
use convcommit::cli::Opt;
use convcommit::logger;
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    logger::init(opt.verbose, opt.quiet);

    if let Err(e) = opt.execute() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
