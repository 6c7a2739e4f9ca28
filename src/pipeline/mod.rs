pub mod stage2_score;
pub mod stage3_project;
pub mod stage4_profile;
pub mod stage5_report;
