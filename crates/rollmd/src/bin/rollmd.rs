fn main() {
    if let Err(err) = rollmd::run() {
        eprintln!("{}", rollmd::format_error(&err));
        std::process::exit(1);
    }
}
