#![allow(non_snake_case)]
mod api;
mod app;
mod config;
mod ui;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("recipe api base url: {}", config::api_base_url());

    let custom_head = r#"
        <style>
            @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

            :root {
                --primary: #FF7043;
                --secondary: #FFA726;
                --accent: #66BB6A;
                --bg-base: #FFF8F0;
                --bg-surface: #FFFFFF;
                --text-main: #33302E;
                --text-sub: #8D8680;
                --border-color: #F0E4D8;
            }

            html, body {
                margin: 0; padding: 0; height: 100%;
                font-family: 'Inter', sans-serif; background: var(--bg-base); color: var(--text-main);
            }

            .main-layout { display: flex; flex-direction: column; min-height: 100vh; }

            .header {
                display: flex; justify-content: space-between; align-items: center;
                padding: 14px 24px; background: var(--primary); color: #fff;
                box-shadow: 0 2px 8px rgba(0,0,0,0.12); flex-shrink: 0;
            }
            .brand { margin: 0; font-size: 1.4em; font-weight: 700; letter-spacing: 0.5px; }

            .searchbar { display: flex; gap: 8px; }
            .search-input {
                padding: 8px 14px; border: none; border-radius: 20px; outline: none;
                min-width: 260px; font-size: 0.95em; background: var(--bg-surface); color: var(--text-main);
            }
            .search-btn {
                border: none; border-radius: 20px; padding: 8px 16px; cursor: pointer;
                background: var(--secondary); color: #fff; font-size: 1em;
            }
            .search-btn:hover { filter: brightness(1.05); }

            .content-area { display: flex; flex: 1; min-height: 0; }

            .sidebar {
                width: 200px; flex-shrink: 0; padding: 20px 0;
                background: var(--bg-surface); border-right: 1px solid var(--border-color);
            }
            .sidebar-title {
                padding: 0 20px 10px 20px; font-size: 0.8em; font-weight: 700;
                color: var(--text-sub); text-transform: uppercase; letter-spacing: 0.5px;
            }
            .category-list { list-style: none; margin: 0; padding: 0; }
            .category-list li {
                padding: 9px 20px; cursor: pointer; font-size: 0.95em;
                transition: background 0.15s, color 0.15s;
            }
            .category-list li:hover { background: var(--bg-base); }
            .category-list li.active { background: var(--primary); color: #fff; font-weight: 600; }

            .main-content { flex: 1; padding: 24px; overflow-y: auto; }

            .recipes-grid {
                display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px;
            }
            .recipes-empty, .loader { padding: 60px 0; text-align: center; color: var(--text-sub); }

            .recipe-card {
                background: var(--bg-surface); border: 1px solid var(--border-color); border-radius: 10px;
                overflow: hidden; cursor: pointer; transition: transform 0.15s, box-shadow 0.15s;
            }
            .recipe-card:hover { transform: translateY(-3px); box-shadow: 0 6px 18px rgba(0,0,0,0.1); }
            .recipe-thumb img { width: 100%; height: 140px; object-fit: cover; display: block; }
            .recipe-info { padding: 12px 14px; }
            .recipe-title { margin: 0 0 4px 0; font-size: 1em; }
            .recipe-category { margin: 0; font-size: 0.8em; color: var(--accent); font-weight: 600; }

            .modal-overlay {
                position: fixed; top: 0; left: 0; width: 100%; height: 100%;
                background: rgba(0,0,0,0.5); z-index: 1000;
                display: flex; align-items: center; justify-content: center;
            }
            .modal-content {
                position: relative; background: var(--bg-surface); border-radius: 12px;
                width: min(560px, 90vw); max-height: 85vh; overflow-y: auto; padding: 28px;
                box-shadow: 0 10px 30px rgba(0,0,0,0.3);
            }
            .modal-close {
                position: absolute; top: 10px; right: 14px; border: none; background: none;
                font-size: 1.6em; cursor: pointer; color: var(--text-sub); line-height: 1;
            }
            .modal-close:hover { color: var(--primary); }
            .detail-title { margin: 0 0 12px 0; color: var(--primary); }
            .detail-image { width: 100%; height: 220px; object-fit: cover; border-radius: 8px; }
            .detail-meta { display: flex; gap: 14px; margin: 12px 0; font-size: 0.9em; }
            .detail-category { color: var(--accent); font-weight: 600; }
            .detail-time { color: var(--text-sub); }
            .detail-summary { margin-bottom: 14px; line-height: 1.5; }
            .detail-section h4 { margin: 14px 0 6px 0; color: var(--secondary); }
            .ingredients-list, .instructions-list { margin: 0; padding-left: 22px; line-height: 1.6; }

            .footer {
                padding: 12px 24px; text-align: center; font-size: 0.85em;
                color: var(--text-sub); border-top: 1px solid var(--border-color); flex-shrink: 0;
            }

            ::-webkit-scrollbar { width: 8px; height: 8px; }
            ::-webkit-scrollbar-track { background: var(--bg-base); }
            ::-webkit-scrollbar-thumb { background: var(--border-color); border-radius: 4px; }
            ::-webkit-scrollbar-thumb:hover { background: var(--text-sub); }
        </style>
    "#;

    let window = WindowBuilder::new()
        .with_title("Recipe Explorer")
        .with_resizable(true);

    let config = Config::new()
        .with_custom_head(custom_head.to_string())
        .with_background_color((255, 248, 240, 255))
        .with_window(window);

    LaunchBuilder::desktop().with_cfg(config).launch(app::app);
}
