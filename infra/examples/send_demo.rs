//! Example sending an SMS through the environment-configured builder
//!
//! Run with: SMS_TRANSPORT=Console cargo run --example send_demo -- +49123456789 "hello hello"

use anyhow::Context;
use sms_infra::{builder_from_env, init_logging_from_env};

fn main() -> anyhow::Result<()> {
    init_logging_from_env()?;

    let mut args = std::env::args().skip(1);
    let recipient = args.next().context("usage: send_demo <recipient> [message]")?;
    let message = args.next().unwrap_or_else(|| String::from("hello hello"));

    let mut sms = builder_from_env()?;
    sms.set_recipients(recipient.as_str())?;

    let result = sms
        .send(&message)
        .with_context(|| format!("sending through {} failed", sms.transport_name()))?;

    println!("\n=== Sent via {} ===", sms.transport_name());
    println!("{}", result.headers_text());
    println!("\n{}", result.message);
    Ok(())
}
