//! End-to-end tests for detection, color, markdown and highlighting.

use cortex_render::{
    Capabilities, Color, HighlightOptions, MapEnv, MarkdownOptions, MemorySurface, QualityTier,
    Renderer, Theme, contrast_ratio, highlight, render_markdown,
};
use cortex_render_core::color::{ansi256_to_rgb, rgb_to_ansi256};

fn options(tier: QualityTier) -> MarkdownOptions {
    MarkdownOptions::new(tier, &Theme::default())
}

#[test]
fn test_identical_environments_pick_identical_tiers() {
    let env = MapEnv::new()
        .with("TERM", "xterm-256color")
        .with("LANG", "en_US.UTF-8");
    let tiers: Vec<QualityTier> = (0..3)
        .map(|_| QualityTier::from_capabilities(&Capabilities::detect_with(&env)))
        .collect();
    assert_eq!(tiers, vec![QualityTier::Standard; 3]);
}

#[test]
fn test_minimal_markdown_never_emits_escapes() {
    let doc = "# T\n> q\n- [ ] a\n1. b\n| x |\n|---|\n```rust\nlet a = \"s\";\n```\n~~s~~ *i* **b** [l](u)\n";
    let out = render_markdown(doc, &options(QualityTier::Minimal));
    assert!(!out.contains('\x1b'));
    assert!(out.contains("let a = \"s\";"));
}

#[test]
fn test_standard_go_fence_is_framed_plain_text() {
    let out = render_markdown("```go\nfunc main() {}\n```\n", &options(QualityTier::Standard));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("func main() {}"));
}

#[test]
fn test_highlight_tiers() {
    let theme = Theme::default();
    let code = "def f(x):\n    return x  # id";
    let minimal = highlight(code, "python", &HighlightOptions::new(QualityTier::Minimal, &theme));
    assert_eq!(minimal, code);

    let standard = highlight(code, "py", &HighlightOptions::new(QualityTier::Standard, &theme));
    assert!(standard.contains("38;5;"));
    assert!(!standard.contains("38;2;"));

    let rich = highlight(code, "python", &HighlightOptions::new(QualityTier::Rich, &theme));
    assert!(rich.contains("38;2;"));
}

#[test]
fn test_unknown_language_passes_through() {
    let theme = Theme::default();
    let out = highlight("SELECT 1", "cobol", &HighlightOptions::new(QualityTier::Rich, &theme));
    assert_eq!(out, "SELECT 1");
}

#[test]
fn test_cube_and_gray_round_trip() {
    assert_eq!(ansi256_to_rgb(rgb_to_ansi256(95, 135, 175)), (95, 135, 175));
    assert_eq!(ansi256_to_rgb(rgb_to_ansi256(128, 128, 128)), (128, 128, 128));
    assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
    assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
}

#[test]
fn test_contrast_is_symmetric_and_bounded() {
    let pairs = [
        (Color::BLACK, Color::WHITE),
        (Color::rgb(30, 60, 90), Color::rgb(200, 180, 20)),
        (Color::RED, Color::RED),
    ];
    for (a, b) in pairs {
        let ab = contrast_ratio(a, b);
        assert!((ab - contrast_ratio(b, a)).abs() < 1e-9);
        assert!((1.0..=21.0).contains(&ab));
    }
    assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 1e-6);
}

#[test]
fn test_renderer_cache_respects_tier() {
    let mut renderer = Renderer::new(MemorySurface::new(10, 2), Theme::default());
    let plain = renderer.render_markdown("*x*");
    renderer.set_tier_override(Some(QualityTier::Ultra));
    let rich = renderer.render_markdown("*x*");
    assert_eq!(plain, "x");
    assert_ne!(plain, rich);
    assert_eq!(renderer.cache().stats().hits, 0);
    assert_eq!(renderer.cache().stats().misses, 2);
}
