//! 单元测试模块
//! 覆盖颜色混合、光栅化、补间、控件树、帧控制器、配置和壳程序界面

pub mod color_tests;
pub mod animation_tests;
pub mod frame_tests;
pub mod config_tests;
pub mod particle_tests;
pub mod shell_tests;
