/// Channel adapter forwarding progress to a background run's caller
mod channel_progress_reporter;

pub use channel_progress_reporter::ChannelProgressReporter;
