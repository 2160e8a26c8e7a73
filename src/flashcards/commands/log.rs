use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::SessionLog;
use std::path::Path;

pub fn run(log: &SessionLog, path: &Path) -> Result<CmdResult> {
    match log.save(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), lines = log.len(), "saved session log");
            let mut result = CmdResult::default().with_count(log.len());
            result.add_message(CmdMessage::success("The log has been saved."));
            Ok(result)
        }
        Err(err) => report(err),
    }
}
