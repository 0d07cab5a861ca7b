mod cli;

fn main() {
    // Every failure leaves through the same "<name>: error:" path with status 1.
    if let Err(err) = cli::run() {
        cli::into_fatal(err).exit();
    }
}
