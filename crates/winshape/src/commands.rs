use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use winshape_core::capture::{
    self, CAPTURE_HOTKEY_LABEL, CaptureEvent, EXIT_HOTKEY_LABEL, HotkeyGuard, POLL_INTERVAL,
};
use winshape_core::errors::ShapeError;
use winshape_core::events;
use winshape_core::styles;
use winshape_core::window::{self, WindowInfo};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("set-resolution", sub_matches)) => handle_set_resolution(sub_matches),
        Some(("set-borderless", sub_matches)) => handle_set_borderless(sub_matches),
        Some(("revert-borderless", sub_matches)) => handle_revert_borderless(sub_matches),
        Some(("get-info", sub_matches)) => handle_get_info(sub_matches),
        Some(("list", sub_matches)) => handle_list(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Resolve the target window from the `--title`/`--id` selector pair.
/// Callers only reach this when clap accepted exactly one of them.
fn resolve_window(matches: &ArgMatches) -> Result<WindowInfo, Box<dyn std::error::Error>> {
    let title = matches.get_one::<String>("title");
    let id = matches.get_one::<isize>("id");

    let result = match (title, id) {
        (Some(title), None) => window::find_window_by_title(title),
        (None, Some(id)) => window::find_window_by_id(*id),
        _ => unreachable!("clap enforces exactly one selector"),
    };

    result.map_err(|e| {
        eprintln!("{}", e);
        error!(
            event = "cli.window_resolution_failed",
            title = ?title,
            id = ?id,
            error = %e,
            error_code = e.error_code()
        );
        events::log_app_error(&e);
        e.into()
    })
}

fn handle_set_resolution(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let width = *matches.get_one::<i32>("width").unwrap();
    let height = *matches.get_one::<i32>("height").unwrap();

    info!(
        event = "cli.set_resolution_started",
        width = width,
        height = height
    );

    let target = resolve_window(matches)?;

    match window::resize_window(target.handle(), width, height) {
        Ok(()) => {
            println!("Resolution changed to {}x{}.", width, height);
            info!(
                event = "cli.set_resolution_completed",
                handle = target.handle()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to change resolution: {}", e);
            error!(event = "cli.set_resolution_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_set_borderless(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.set_borderless_started");

    let target = resolve_window(matches)?;

    match styles::apply_borderless(target.handle()) {
        Ok(()) => {
            println!("Borderless mode enabled.");
            info!(
                event = "cli.set_borderless_completed",
                handle = target.handle()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to enable borderless mode: {}", e);
            error!(event = "cli.set_borderless_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_revert_borderless(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.revert_borderless_started");

    let target = resolve_window(matches)?;

    match styles::revert_borderless(target.handle()) {
        Ok(()) => {
            println!("Borderless mode reverted.");
            info!(
                event = "cli.revert_borderless_completed",
                handle = target.handle()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to revert borderless mode: {}", e);
            error!(event = "cli.revert_borderless_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_get_info(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let has_selector = matches.get_one::<String>("title").is_some()
        || matches.get_one::<isize>("id").is_some();

    info!(
        event = "cli.get_info_started",
        json_output = json_output,
        interactive = !has_selector
    );

    if !has_selector {
        if json_output {
            warn!(
                event = "cli.get_info_json_ignored",
                reason = "interactive capture reports are human-readable"
            );
            eprintln!("Warning: --json is ignored in interactive capture mode");
        }
        return run_capture_loop();
    }

    let target = resolve_window(matches)?;
    print_info(&target, json_output)?;

    info!(event = "cli.get_info_completed", handle = target.handle());
    Ok(())
}

/// JSON shape for `get-info --json`.
#[derive(Serialize)]
struct InfoReport<'a> {
    handle: isize,
    title: &'a str,
    width: i32,
    height: i32,
    aspect_ratio: RatioReport,
}

#[derive(Serialize)]
struct RatioReport {
    horizontal: i32,
    vertical: i32,
}

fn print_info(window: &WindowInfo, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (horizontal, vertical) = window.aspect_ratio().map_err(|e| {
        eprintln!("{}", e);
        error!(
            event = "cli.get_info_ratio_failed",
            handle = window.handle(),
            error = %e
        );
        events::log_app_error(&e);
        Box::<dyn std::error::Error>::from(e)
    })?;

    if json_output {
        let report = InfoReport {
            handle: window.handle(),
            title: window.display_title(),
            width: window.width(),
            height: window.height(),
            aspect_ratio: RatioReport {
                horizontal,
                vertical,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Window id: {}, Title: {}",
            window.handle(),
            window.display_title()
        );
        println!(
            "Current resolution: {}x{}",
            window.width(),
            window.height()
        );
        println!("Aspect ratio: {}:{}", horizontal, vertical);
    }

    Ok(())
}

fn run_capture_loop() -> Result<(), Box<dyn std::error::Error>> {
    // Guard scope covers the whole loop: hotkeys are released on break,
    // on error, and on unwind.
    let _guard = HotkeyGuard::register().map_err(|e| {
        eprintln!("Failed to start interactive capture: {}", e);
        error!(event = "cli.capture_start_failed", error = %e);
        events::log_app_error(&e);
        Box::<dyn std::error::Error>::from(e)
    })?;

    println!(
        "Hover over a window and press {} to capture its info.",
        CAPTURE_HOTKEY_LABEL
    );
    println!("Press {} to exit.", EXIT_HOTKEY_LABEL);

    info!(event = "cli.capture_loop_started");

    loop {
        std::thread::sleep(POLL_INTERVAL);
        match capture::poll_event() {
            Some(CaptureEvent::Capture) => report_window_under_cursor(),
            Some(CaptureEvent::Exit) => break,
            None => {}
        }
    }

    info!(event = "cli.capture_loop_completed");
    Ok(())
}

/// One capture trigger: report the window under the cursor. Failures are
/// printed and the loop keeps running so the user can try again.
fn report_window_under_cursor() {
    match capture::window_under_cursor() {
        Ok(Some(handle)) => match window::find_window_by_id(handle) {
            Ok(target) => {
                let _ = print_info(&target, false);
            }
            Err(e) => {
                eprintln!("{}", e);
                warn!(event = "cli.capture_lookup_failed", handle = handle, error = %e);
            }
        },
        Ok(None) => {
            println!("Window not found, try again.");
            info!(event = "cli.capture_missed");
        }
        Err(e) => {
            eprintln!("Failed to read cursor position: {}", e);
            warn!(event = "cli.capture_cursor_failed", error = %e);
        }
    }
}

fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    match window::list_windows() {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No visible windows found.");
            } else {
                println!("Visible windows:");
                table::print_windows_table(&windows);
            }

            info!(event = "cli.list_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    // Command handlers need a live desktop; they are exercised by the
    // integration tests in tests/cli_output.rs and on Windows hosts.
}
