//! Progress display for batch maze generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Mazes: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting finished mazes
pub struct ProgressManager {
    bar: ProgressBar,
    completed: Cell<u64>,
}

impl ProgressManager {
    /// Create a progress bar for `maze_count` mazes
    pub fn new(maze_count: usize) -> Self {
        let bar = ProgressBar::new(maze_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: Cell::new(0),
        }
    }

    /// Record one finished maze
    pub fn complete_maze(&self, walls_broken: usize) {
        self.completed.set(self.completed.get() + 1);
        self.bar.set_message(format!("{walls_broken} passages"));
        self.bar.inc(1);
    }

    /// Number of mazes recorded so far
    ///
    /// Unaffected by [`ProgressManager::finish`], which fills the bar.
    pub fn completed(&self) -> u64 {
        self.completed.get()
    }

    /// Close the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} mazes generated", self.completed()));
    }
}
