use anyhow::Result;
use tracing::info;

use notos_session::ConverterSession;

use crate::cli::ConvertArgs;
use crate::config::NotosConfig;
use crate::convert;
use crate::request::{read_request, write_reply};

/// Run one conversion request through a fresh converter session.
pub fn run(args: ConvertArgs) -> Result<()> {
    let config = NotosConfig::load(&args.config)?;
    let session = ConverterSession::with_config(convert::build_convert_config(&config.converter));

    info!(path = %args.request.display(), "reading conversion request");
    let request = read_request(&args.request)?;
    let reply = session.receive(&request);
    session.destroy();

    write_reply(&reply, args.output.as_deref())
}
