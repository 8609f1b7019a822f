pub mod stage2_evaluate;
pub mod stage3_report;
