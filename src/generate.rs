use anyhow::Result;
use tracing::info;

use notos_session::GeneratorSession;

use crate::cli::GenerateArgs;
use crate::config::NotosConfig;
use crate::convert;
use crate::request::{read_request, write_reply};

/// Run one generation request through a fresh generator session.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = NotosConfig::load(&args.config)?;
    let seed = args.seed.or(config.seed);
    let defaults = convert::build_default_ranges(&config.generator);

    let mut session = GeneratorSession::new(defaults, config.generator.use_random_walk, seed);

    info!(path = %args.request.display(), "reading generation request");
    let request = read_request(&args.request)?;
    let reply = session.receive(&request);
    session.destroy();

    write_reply(&reply, args.output.as_deref())
}
