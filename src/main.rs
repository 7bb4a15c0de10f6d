use invoice_recovery::args::Args;
use invoice_recovery::{logging, run, Outcome, NO_DATA_NOTICE};

fn main() {
    let args = Args::parse();
    logging::init(&args.log_file);

    match run(&args) {
        Outcome::NoData => println!("{}", NO_DATA_NOTICE),
        Outcome::Report(report) => println!("{}", report),
    }
}
