use crate::collection::CardCollection;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(collection: &mut CardCollection) -> CmdResult {
    collection.reset_stats();
    let mut result = CmdResult::default().with_count(collection.len());
    result.add_message(CmdMessage::success("Card statistics have been reset."));
    result
}
