//! # Delagil 网站后端 - Tauri Cargo 构建脚本
//!
//! 在 `cargo build` 编译主项目之前自动执行，
//! 根据 `tauri.conf.json` 生成 Tauri 运行时所需的上下文和资源绑定代码。

fn main() {
  tauri_build::build()
}
