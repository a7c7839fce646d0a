use anyhow::Result;
use serde_json::Value;
use tracing::info;

use notos_session::InterpolatorSession;

use crate::cli::InterpolateArgs;
use crate::request::{read_request, write_reply};

/// Run one interpolation request through a fresh interpolator session.
pub fn run(args: InterpolateArgs) -> Result<()> {
    let session = InterpolatorSession::create(&Value::Null);

    info!(path = %args.request.display(), "reading interpolation request");
    let request = read_request(&args.request)?;
    let reply = session.receive(&request);
    session.destroy();

    write_reply(&reply, args.output.as_deref())
}
