pub mod timer_clock;
