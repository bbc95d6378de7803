//! Driver binary: fetch headers from a fixed host list, concurrently.
//!
//! One task per host; all tasks are spawned up front and joined as a
//! batch. A failing host prints one stderr line and never holds up its
//! siblings.

use futures::future::join_all;
use wget_core::{fetch, http, Target};

/// Hosts fetched on every run. No flags, no config: edit and rebuild.
const HOSTS: [&str; 3] = ["www.shiyanlou.com", "www.sohu.com", "t.tt"];

async fn wget(host: &'static str) {
    println!("wget {host}");
    match fetch(&Target::new(host)).await {
        Ok(lines) => {
            for raw in &lines {
                println!("{}", http::header_line(host, raw));
            }
        }
        Err(e) => eprintln!("wget {host}: {e}"),
    }
}

#[tokio::main]
async fn main() {
    let handles: Vec<_> = HOSTS
        .into_iter()
        .map(|host| tokio::spawn(wget(host)))
        .collect();
    for result in join_all(handles).await {
        // Fetch errors were already printed inside the task; only a panic
        // surfaces here.
        if let Err(e) = result {
            eprintln!("wget task failed: {e}");
        }
    }
}
