use city_ip_ranges::config::Config;
use city_ip_ranges::output::status_line;
use city_ip_ranges::run_lookup;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    //
    log::info!("#Start main()");

    let config = Config::default();
    let stdin = std::io::stdin();
    let outcome = run_lookup(&config, stdin.lock(), std::io::stdout())?;
    println!("{}", status_line(&outcome));

    Ok(())
}
