pub mod stage1_load;
pub mod stage2_render;
pub mod stage3_report;
