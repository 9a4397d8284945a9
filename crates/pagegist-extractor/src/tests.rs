//! Integration tests for the extraction cascade

#[cfg(test)]
mod tests {
    use crate::{ContentExtractor, ExtractError, ExtractorConfig, HtmlDocument};

    fn extract(html: &str) -> Result<String, ExtractError> {
        let dom = HtmlDocument::parse(html);
        ContentExtractor::new(ExtractorConfig::default()).extract(&dom)
    }

    #[test]
    fn test_article_container_wins_over_everything_else() {
        let article_text = "The quick brown fox jumps over the lazy dog. ".repeat(8);
        let html = format!(
            "<html><body>\n\
             <nav>Home About Contact Privacy</nav>\n\
             <article>{}</article>\n\
             <p>A stray paragraph that must not appear in the output, ever.</p>\n\
             <footer>Subscribe to our newsletter today</footer>\n\
             </body></html>",
            article_text
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, article_text.trim());
        assert!(!text.contains("stray paragraph"));
        assert!(!text.contains("newsletter"));
    }

    #[test]
    fn test_cms_wrapper_class_is_recognized() {
        let content = "Wikipedia-style content paragraph with plenty of words. ".repeat(6);
        let html = format!(
            "<html><body><div class=\"mw-parser-output\">{}</div>\n\
             <div>Unrelated sidebar text that should be ignored completely.</div>\n\
             </body></html>",
            content
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, content.trim());
    }

    #[test]
    fn test_short_container_falls_through_to_paragraphs() {
        let para_a = format!("Opening paragraph of the piece. {}", "alpha ".repeat(20));
        let para_b = format!("Closing paragraph of the piece. {}", "omega ".repeat(20));
        // The article exists but is under the primary threshold, so the
        // cascade must advance to paragraph aggregation.
        let html = format!(
            "<html><body>\n\
             <article>Too short to count.</article>\n\
             <p>{}</p>\n\
             <p>{}</p>\n\
             </body></html>",
            para_a, para_b
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("{}\n\n{}", para_a.trim(), para_b.trim()));
    }

    #[test]
    fn test_paragraph_only_page_uses_aggregation() {
        let para = "List items and paragraphs carry the content here. ".repeat(3);
        let html = format!(
            "<html><body>\n\
             <p>{}</p>\n\
             <li>{}</li>\n\
             <p>tiny</p>\n\
             </body></html>",
            para, para
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, format!("{}\n\n{}", para.trim(), para.trim()));
        assert!(!text.contains("tiny"));
    }

    #[test]
    fn test_body_filter_removes_boilerplate_lines() {
        let real = format!(
            "Here is the one genuine sentence of article content on the page. {}",
            "detail ".repeat(10)
        );
        let html = format!(
            "<html><body>\n\
             <div>Sign in to your account to continue reading</div>\n\
             <div>We use cookies to personalize content and ads here</div>\n\
             <div>Subscribe now and never miss another breaking story</div>\n\
             <div>Advertisement sponsored placement appears in this spot</div>\n\
             <div>{}</div>\n\
             <div>Read more about our privacy policy and terms of use</div>\n\
             </body></html>",
            real
        );

        let text = extract(&html).unwrap();
        assert_eq!(text, real.trim());
        for needle in ["Sign in", "cookies", "Subscribe", "Advertisement", "privacy"] {
            assert!(!text.contains(needle), "boilerplate survived: {}", needle);
        }
    }

    #[test]
    fn test_body_filter_drops_short_nav_labels() {
        let real = format!("The single substantial line on an otherwise bare page. {}", "w ".repeat(30));
        let html = format!(
            "<html><body>\n\
             <div>Home</div>\n\
             <div>News</div>\n\
             <div>Sports</div>\n\
             <div>{}</div>\n\
             </body></html>",
            real
        );

        let text = extract(&html).unwrap();
        assert!(!text.contains("Home"));
        assert!(!text.contains("Sports"));
        assert!(text.contains("substantial line"));
    }

    #[test]
    fn test_minimum_viable_length_boundary() {
        // 99 characters: insufficient. 100 characters: accepted.
        let html_99 = format!("<html><body><div>{}</div></body></html>", "a".repeat(99));
        let html_100 = format!("<html><body><div>{}</div></body></html>", "a".repeat(100));

        match extract(&html_99) {
            Err(ExtractError::InsufficientContent(found, min)) => {
                assert_eq!(found, 99);
                assert_eq!(min, 100);
            }
            other => panic!("expected InsufficientContent, got {:?}", other),
        }

        let text = extract(&html_100).unwrap();
        assert_eq!(text.chars().count(), 100);
    }

    #[test]
    fn test_empty_document_fails() {
        assert!(matches!(
            extract("<html><body></body></html>"),
            Err(ExtractError::InsufficientContent(0, _))
        ));
    }

    #[test]
    fn test_output_truncated_to_exactly_max_chars() {
        // 50 paragraphs of 200 chars each: 10,000 chars of real content.
        let paragraphs: String = (0..50)
            .map(|_| format!("<p>{}</p>\n", "x".repeat(200)))
            .collect();
        let html = format!("<html><body>\n{}</body></html>", paragraphs);

        let text = extract(&html).unwrap();
        assert_eq!(text.chars().count(), 8000);
    }

    #[test]
    fn test_output_is_normalized() {
        let messy = format!(
            "First  line\twith\ttabs   and   spaces. {}\n\n\n\n\nSecond block after too many blanks. {}",
            "pad ".repeat(20),
            "pad ".repeat(20)
        );
        let html = format!("<html><body><article>{}</article></body></html>", messy);

        let text = extract(&html).unwrap();
        assert!(!text.contains('\t'));
        assert!(!text.contains("  "));
        assert!(!text.contains("\n\n\n"));
        assert!(text.contains("First line with tabs and spaces."));
    }

    #[test]
    fn test_custom_thresholds_are_honored() {
        let mut config = ExtractorConfig::default();
        config.min_viable_chars = 10;
        config.max_chars = 50;
        config.selector_min_chars = 20;

        let html = format!("<html><body><article>{}</article></body></html>", "b".repeat(60));
        let dom = HtmlDocument::parse(&html);
        let text = ContentExtractor::new(config).extract(&dom).unwrap();
        assert_eq!(text.chars().count(), 50);
    }
}
