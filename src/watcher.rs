use crossbeam_channel::Receiver;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;

/// Keeps a notify watcher alive on one configuration file
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `path`; events arrive on the returned receiver until
    /// the watcher is dropped
    pub fn watching<P: AsRef<Path>>(
        path: P,
    ) -> notify::Result<(Self, Receiver<notify::Result<Event>>)> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;
        watcher.watch(path.as_ref(), RecursiveMode::NonRecursive)?;
        Ok((Self { _watcher: watcher }, rx))
    }
}

/// Whether an event means the file's contents may have changed
pub fn is_content_change(event: &Event) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
}
