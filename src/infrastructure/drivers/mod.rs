mod led_strip;

pub use led_strip::SmartLedsSink;
