//! Service Layer Outcome Pattern
//!
//! Repository code reports failures as outcomes, the service layer adds
//! method info, and the HTTP-facing edge crosses into `Result`.

use outcome_rail::prelude::*;

// Domain layer error
#[derive(Debug)]
enum DbError {
    #[allow(dead_code)]
    ConnectionFailed,
    NotFound,
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DbError::ConnectionFailed => write!(f, "database connection failed"),
            DbError::NotFound => write!(f, "record not found"),
        }
    }
}

impl std::error::Error for DbError {}

#[derive(Debug)]
struct Profile {
    #[allow(dead_code)]
    name: String,
}

fn fetch_user_from_db(_user_id: u64) -> Result<String, DbError> {
    // Simulate database operation
    Err(DbError::NotFound)
}

fn load_profile(user_id: u64) -> Outcome<Profile> {
    let caller = format!("user_id={user_id}");
    fetch_user_from_db(user_id)
        .outcome(ErrorKind::NotFound)
        .map(|name| Profile { name })
        .add_method_info(["load_profile", caller.as_str()])
        .set_property(PropertyKind::CorrelationId, "req-7f3a")
}

fn http_status(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::WrongArguments | ErrorKind::NotValid => 400,
        ErrorKind::NoAuthentication => 401,
        ErrorKind::NotAuthorized => 403,
        ErrorKind::Timeout | ErrorKind::GatewayTimeout => 504,
        ErrorKind::BadGateway | ErrorKind::NetworkError => 502,
        _ => 500,
    }
}

fn handle_request(user_id: u64) -> OutcomeResult<Profile> {
    load_profile(user_id).ensure_output()
}

fn main() {
    match handle_request(42) {
        Ok(profile) => println!("{:?}", profile),
        Err(EnsureError::Failed(err)) => {
            eprintln!("{} -> {}", http_status(err.kind()), err);
            // Output: 404 -> NotFound: Profile load_profile, user_id=42, record not found
        }
        Err(other) => eprintln!("500 -> {}", other),
    }
}
