fn main() {
    if let Err(err) = chandas::run() {
        eprintln!("{}", chandas::format_error(&err));
        std::process::exit(1);
    }
}
