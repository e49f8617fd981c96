use tasklog::{Config, Level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // TASKLOG_LEVEL, TASKLOG_FILE, TASKLOG_TASK, TASKLOG_TIME, TASKLOG_SOURCE
    let log = Config::from_env().build()?;

    log.info("server starting");
    tasklog::debug!(log, "request_count", 42);

    let req = log.with_task_name("req-7f3a");
    tasklog::warn!(req, "retrying", 3, "times");
    req.error("upstream unavailable");

    log.reset_level(Level::Error);
    log.info("not written any more");

    // Reopen is a no-op unless the logger writes to a file.
    log.reopen()?;
    log.close()?;
    Ok(())
}
