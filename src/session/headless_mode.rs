//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::store::LoadUpdate;
use crate::workers::fetcher::StatsFetcher;
use std::error::Error;

/// Runs the dashboard in headless mode
///
/// Dispatches one dataset load, prints worker events to the console, and
/// exits once the load resolves (or on Ctrl+C).
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });
    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    // Dispatch the single dataset load
    let fetcher = StatsFetcher::new(session.api.clone(), session.event_sender.clone());
    let fetch_handle = tokio::spawn(async move { fetcher.fetch().await });

    // Event loop: log events to console until the load resolves
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                println!("{}", event);
                if matches!(event.transition, Some(LoadUpdate::Succeeded(_) | LoadUpdate::Failed(_))) {
                    break;
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    let _ = fetch_handle.await;
    print_session_exit_success();

    Ok(())
}
