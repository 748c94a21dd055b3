fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    if let Err(err) = pointdist::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
