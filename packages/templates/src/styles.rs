// ABOUTME: Inline stylesheets for each portfolio template
// ABOUTME: Preview and final documents share fonts, colors and card treatment per template

use crate::template::Template;

const MODERN_PREVIEW: &str = r#"
        body { font-family: 'Arial', sans-serif; background: #f5f5f5; margin: 0; padding: 2rem; }
        .header { background: #4CAF50; color: white; padding: 2rem; border-radius: 10px; margin-bottom: 2rem; }
        .project { background: white; padding: 1.5rem; margin: 1rem 0; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
"#;

const CREATIVE_PREVIEW: &str = r#"
        body { font-family: 'Georgia', serif; background: linear-gradient(135deg, #ff6b6b, #4ecdc4); margin: 0; padding: 2rem; }
        .header { background: rgba(255,255,255,0.9); padding: 2rem; border-radius: 15px; margin-bottom: 2rem; }
        .project { background: rgba(255,255,255,0.8); padding: 1.5rem; margin: 1rem 0; border-radius: 10px; }
"#;

const PROFESSIONAL_PREVIEW: &str = r#"
        body { font-family: 'Times New Roman', serif; background: #f8f9fa; margin: 0; padding: 2rem; }
        .header { background: #2196F3; color: white; padding: 2rem; border-radius: 5px; margin-bottom: 2rem; }
        .project { background: white; padding: 1.5rem; margin: 1rem 0; border: 1px solid #ddd; }
"#;

const MINIMAL_PREVIEW: &str = r#"
        body { font-family: 'Helvetica', sans-serif; background: white; margin: 0; padding: 2rem; }
        .header { border-bottom: 1px solid #eee; padding-bottom: 1rem; margin-bottom: 2rem; }
        .project { padding: 1rem 0; border-bottom: 1px solid #eee; }
"#;

const MODERN_FINAL: &str = r#"
        body { font-family: 'Arial', sans-serif; background: #f5f5f5; margin: 0; padding: 0; }
        .header { background: #4CAF50; color: white; padding: 3rem 2rem; text-align: center; }
        .projects { padding: 2rem; max-width: 1200px; margin: 0 auto; }
        .project { background: white; margin: 1rem 0; padding: 2rem; border-radius: 10px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .tech-tag { display: inline-block; background: #e8f5e9; color: #2e7d32; padding: 0.2rem 0.6rem; margin: 0 0.3rem 0.3rem 0; border-radius: 12px; font-size: 0.85rem; }
"#;

const CREATIVE_FINAL: &str = r#"
        body { font-family: 'Georgia', serif; background: linear-gradient(135deg, #ff6b6b, #4ecdc4); margin: 0; padding: 0; }
        .header { background: rgba(255,255,255,0.9); padding: 3rem 2rem; text-align: center; }
        .projects { padding: 2rem; max-width: 1200px; margin: 0 auto; }
        .project { background: rgba(255,255,255,0.8); margin: 1rem 0; padding: 2rem; border-radius: 15px; }
        .tech-tag { display: inline-block; background: #ff6b6b; color: white; padding: 0.2rem 0.7rem; margin: 0 0.3rem 0.3rem 0; border-radius: 15px; font-size: 0.85rem; }
"#;

const PROFESSIONAL_FINAL: &str = r#"
        body { font-family: 'Times New Roman', serif; background: #f8f9fa; margin: 0; padding: 0; }
        .header { background: #2196F3; color: white; padding: 3rem 2rem; text-align: center; }
        .projects { padding: 2rem; max-width: 1200px; margin: 0 auto; }
        .project { background: white; margin: 1rem 0; padding: 2rem; border: 1px solid #ddd; }
        .tech-tag { display: inline-block; border: 1px solid #2196F3; color: #2196F3; padding: 0.1rem 0.5rem; margin: 0 0.3rem 0.3rem 0; font-size: 0.85rem; }
"#;

const MINIMAL_FINAL: &str = r#"
        body { font-family: 'Helvetica', sans-serif; background: white; margin: 0; padding: 0; }
        .header { border-bottom: 1px solid #eee; padding: 3rem 2rem; text-align: center; }
        .projects { padding: 2rem; max-width: 800px; margin: 0 auto; }
        .project { padding: 2rem 0; border-bottom: 1px solid #eee; }
        .tech-tag { display: inline-block; color: #666; margin: 0 0.6rem 0.3rem 0; font-size: 0.85rem; }
"#;

/// Stylesheet for the template preview frame
pub fn preview_css(template: Template) -> &'static str {
    match template {
        Template::Modern => MODERN_PREVIEW,
        Template::Creative => CREATIVE_PREVIEW,
        Template::Professional => PROFESSIONAL_PREVIEW,
        Template::Minimal => MINIMAL_PREVIEW,
    }
}

/// Stylesheet for a generated portfolio
pub fn final_css(template: Template) -> &'static str {
    match template {
        Template::Modern => MODERN_FINAL,
        Template::Creative => CREATIVE_FINAL,
        Template::Professional => PROFESSIONAL_FINAL,
        Template::Minimal => MINIMAL_FINAL,
    }
}
