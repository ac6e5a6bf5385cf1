use chrono::{DateTime, Duration, Utc};

/// 32 bytes from the OS CSPRNG, hex-encoded to 64 URL-safe characters.
const TOKEN_BYTES: usize = 32;

/// How long an issued reset token stays valid.
pub fn validity_window() -> Duration {
    Duration::hours(1)
}

/// Generate a fresh reset token and its expiry timestamp.
pub fn generate() -> (String, DateTime<Utc>) {
    let bytes: [u8; TOKEN_BYTES] = rand::random();
    (hex::encode(bytes), Utc::now() + validity_window())
}
