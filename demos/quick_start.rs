use outcome_rail::traits::ResultExt;
use outcome_rail::{bail, ErrorKind, Outcome, PropertyKind, SuccessKind};

fn load_config() -> Outcome<String> {
    // Classify the io::Error, keeping it as the cause
    std::fs::read_to_string("config.toml").outcome(ErrorKind::ConfigurationError)
}

fn validate_name(input: &str) -> Outcome<String> {
    let mut problems = Vec::new();
    if input.is_empty() {
        problems.push("name cannot be empty");
    }
    if input.len() > 16 {
        problems.push("name longer than 16 characters");
    }
    if !problems.is_empty() {
        return Outcome::error_lines(ErrorKind::NotValid, problems);
    }
    Outcome::ok_as(SuccessKind::Created, input.to_string())
}

fn lookup(id: u64) -> Outcome<&'static str> {
    if id != 1 {
        bail!(ErrorKind::NotFound, "no account with id {}", id);
    }
    Outcome::ok("ferris").set_property(PropertyKind::Notice, "served from cache")
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Classifying a std error
    println!("\n1. Classifying a std error:");
    let config = load_config();
    match config.error_description() {
        Some(desc) => println!("Error [{}]: {}", desc.kind(), desc.message()),
        None => println!("Loaded {} bytes", config.output().map_or(0, String::len)),
    }

    // 2. Accumulated messages
    println!("\n2. Accumulated messages:");
    let name = validate_name("");
    println!("{}", name);

    // 3. Properties and the error-returning boundary
    println!("\n3. Properties and the boundary:");
    let found = lookup(1);
    if let Some(notices) = found.properties(&PropertyKind::Notice) {
        println!("{} notice(s) attached", notices.len());
    }
    match lookup(2).ensure_output() {
        Ok(user) => println!("Found {}", user),
        Err(err) => println!("Error: {}", err),
    }
}
