mod schedule;

pub use schedule::ScheduleClient;
