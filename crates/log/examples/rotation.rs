use tasklog::{Level, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("tasklog-rotation");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("app.log");

    let log = Logger::open(&path, Level::Info)?;
    log.info("written before rotation");

    // What logrotate does before signalling the process
    std::fs::rename(&path, dir.join("app.log.1"))?;
    log.reopen()?;

    log.info("written after rotation");
    log.close()?;

    println!("logs in {}", dir.display());
    Ok(())
}
