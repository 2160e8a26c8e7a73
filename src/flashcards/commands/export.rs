use crate::collection::CardCollection;
use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

pub fn run(collection: &CardCollection, path: &Path) -> Result<CmdResult> {
    match collection.export_to(path) {
        Ok(count) => {
            let mut result = CmdResult::default().with_count(count);
            result.add_message(CmdMessage::success(format!(
                "{} cards have been saved.",
                count
            )));
            Ok(result)
        }
        Err(err) => report(err),
    }
}
