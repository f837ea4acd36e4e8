use std::io::Write;
use std::path::PathBuf;

/// Directory dev-mode logs are written to: `$FIGDOC_LOG_DIR`, else
/// `figdoc/logs` under the working directory.
pub fn logs_dir() -> PathBuf {
    std::env::var_os("FIGDOC_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("figdoc/logs"))
}

/// Timestamped default log file name, e.g. `2024_01_12_14_30_52.log`.
pub fn timestamped_filename() -> String {
    format!("{}.log", chrono::Local::now().format("%Y_%m_%d_%H_%M_%S"))
}

/// Writes one rendered entry. Failures are swallowed; logging must never
/// abort generation.
pub fn write_entry(rendered: &str, filename: &str, append: bool) {
    let dir = logs_dir();
    let _ = std::fs::create_dir_all(&dir);

    let mut options = std::fs::OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    if let Ok(mut file_handle) = options.open(dir.join(filename)) {
        let _ = file_handle.write_all(rendered.as_bytes());
    }
}

/// Internal macro for rendering a log entry
#[macro_export]
#[doc(hidden)]
macro_rules! __internal_log_render {
    ($content:expr) => {{
        let expr_str = stringify!($content);
        if expr_str.starts_with("format!")
            || expr_str.starts_with("&format!")
            || expr_str.starts_with("\"")
            || expr_str.starts_with("String::")
        {
            // For formatted strings, just output the content directly
            format!("{}\n", $content)
        } else {
            let value_str = format!("{:#?}", &$content);
            if value_str.contains('\n') || value_str.len() > 80 {
                format!(
                    "[{}:{}] {} = \n{}\n",
                    file!(),
                    line!(),
                    stringify!($content),
                    value_str
                )
            } else {
                format!(
                    "[{}:{}] {} = {}\n",
                    file!(),
                    line!(),
                    stringify!($content),
                    value_str
                )
            }
        }
    }};
}

/// Dev-mode logging macro for the figdoc crates.
///
/// # Examples
///
/// Log to a timestamp-based file (e.g., "2024_01_12_14_30_52.log"):
/// ```no_run
/// # use figdoc_core::figdoc_log;
/// figdoc_log!("Generation started");
/// ```
///
/// Log to a specific file with append mode:
/// ```no_run
/// # use figdoc_core::figdoc_log;
/// figdoc_log!("Collected properties", "collect.log", true);
/// ```
#[cfg(feature = "dev-mode")]
#[macro_export]
macro_rules! figdoc_log {
    ($content:expr) => {{
        $crate::log::write_entry(
            &$crate::__internal_log_render!($content),
            &$crate::log::timestamped_filename(),
            false,
        );
    }};
    ($content:expr, $filename:expr) => {{
        $crate::log::write_entry(&$crate::__internal_log_render!($content), $filename, false);
    }};
    ($content:expr, $filename:expr, $append:expr) => {{
        $crate::log::write_entry(&$crate::__internal_log_render!($content), $filename, $append);
    }};
}

/// Without `dev-mode` the macro expands to nothing and its arguments are
/// never evaluated.
#[cfg(not(feature = "dev-mode"))]
#[macro_export]
macro_rules! figdoc_log {
    ($($tokens:tt)*) => {{}};
}
