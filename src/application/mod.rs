mod local_run;

pub use local_run::{run_load, run_load_with};
