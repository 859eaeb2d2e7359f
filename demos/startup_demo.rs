// SPDX-License-Identifier: Apache-2.0 OR MIT
// Demo: records logged before initialization survive into the configured sink
//
// Run with: cargo run --example startup_demo
// Try:      BOOTLOG_FORMAT=json BOOTLOG_LEVEL=trace cargo run --example startup_demo

use bootlog::{log_info, log_trace, log_warn};

fn main() -> anyhow::Result<()> {
    // No sink exists yet; these ride the startup backlog.
    log_info!("service starting, pid {}", std::process::id());

    let workers: Vec<_> = (0..4)
        .map(|id| {
            std::thread::spawn(move || {
                log_trace!("worker {id} warming up");
                log_info!("worker {id} ready");
            })
        })
        .collect();
    for worker in workers {
        let _ = worker.join();
    }

    // Resolve BOOTLOG_* and flip to direct mode; the backlog, including the
    // resolution steps logged during init itself, flushes to the sink in order.
    bootlog::init_from_env()?;

    log_warn!("this line goes straight to the sink");
    bootlog::wait_for_drain();
    Ok(())
}
