use indicatif::{ProgressBar, ProgressStyle};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len}") {
        bar.set_style(style);
    }
    bar
}
