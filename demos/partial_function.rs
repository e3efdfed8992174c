// Example collecting optional strings through a partial function

use anyhow::Result;
use optio::{Opt, PartialFunction};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Length of a string, treating a missing string as empty. Only defined at "a".
struct StringLength;

impl<'a> PartialFunction<Option<&'a str>, usize> for StringLength {
    fn is_defined_at(&self, value: &Option<&'a str>) -> bool {
        *value == Some("a")
    }

    fn call(&self, value: Option<&'a str>) -> usize {
        value.map_or(0, str::len)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let inputs = [
        Opt::of(Some("a")),
        Opt::of(Some("abc")),
        Opt::some(None),
        Opt::of(None),
    ];

    for input in inputs {
        let collected = input.collect(&StringLength);
        println!("{:?} -> {}", input, collected);
    }

    // Only "a" is inside the domain, so applying to anything else fails
    println!("apply(\"a\") = {}", StringLength.apply(Some("a"))?);
    if let Err(e) = StringLength.apply(Some("abc")) {
        println!("apply(\"abc\") failed: {}", e);
    }

    let lengths = Opt::traverse([Some("a"), Some("a")], |value| StringLength.lift(value));
    println!("traverse of two \"a\" = {:?}", lengths);

    let lengths = Opt::traverse([Some("a"), None], |value| StringLength.lift(value));
    println!("traverse with a missing string = {:?}", lengths);

    Ok(())
}
