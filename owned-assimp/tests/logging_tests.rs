//! Capturing Assimp's own log output
//!
//! Kept in its own test binary: Assimp's logger is process-wide.

use std::path::Path;
use std::sync::{Arc, Mutex};

use owned_assimp::{Importer, LogLevel, LogStream, Logger, MemoryLogStream};

#[test]
fn test_import_messages_reach_attached_stream() {
    let path = Path::new("tests/models/box.obj");
    if !path.exists() {
        println!("Skipping logging test - model file not found: {}", path.display());
        return;
    }

    let memory = Arc::new(Mutex::new(MemoryLogStream::new()));
    let shared: Arc<Mutex<dyn LogStream>> = memory.clone();
    let mut logger = Logger::new();
    logger.attach_stream(shared.clone());
    owned_assimp::enable_verbose_logging(true);

    Importer::new().read_file(path).expect("box.obj should import");
    assert!(logger.detach_stream(&shared));
    assert!(logger.is_empty());

    let memory = memory.lock().expect("stream lock");
    assert!(!memory.messages().is_empty(), "expected Assimp to log during import");
    assert!(memory.messages_at_least(LogLevel::Debug).len() >= memory.messages_at_least(LogLevel::Info).len());

    owned_assimp::enable_verbose_logging(false);
}
