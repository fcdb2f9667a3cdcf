//! # Delagil 网站后端 - 原生入口点
//!
//! `main()` 只负责启动应用，插件注册、配置加载和 command 注册都在 `lib.rs` 中完成。

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
  app_lib::run();
}
