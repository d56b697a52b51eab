//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use single_html::core::{create_single_file_document, BundleOptions};
    use single_html::parsers::{inline_icons, inline_scripts, inline_stylesheets};
    use single_html::session::Session;

    use crate::common::{Site, ICO_DATA, ICO_DATA_URL, PNG_DATA, PNG_DATA_URL};

    fn session() -> Session {
        Session::new(BundleOptions::default())
    }

    #[test]
    fn stylesheet_content_is_preserved() {
        let site = Site::new();
        let css = "@media (max-width: 600px) {\n  .a > .b { content: \"}\"; }\n}\n";
        site.write("style.css", css);

        let result = create_single_file_document(
            &mut session(),
            "<link rel=\"stylesheet\" href=\"style.css\">",
            site.path(),
        )
        .unwrap();

        assert_eq!(result, format!("<style>\n{}\n</style>", css));
    }

    #[test]
    fn dot_slash_prefix_resolves_like_plain_path() {
        let site = Site::new();
        site.write("style.css", "p { margin: 0; }");

        let plain = create_single_file_document(
            &mut session(),
            "<link rel=\"stylesheet\" href=\"style.css\">",
            site.path(),
        )
        .unwrap();
        let dotted = create_single_file_document(
            &mut session(),
            "<link rel=\"stylesheet\" href=\"./style.css\">",
            site.path(),
        )
        .unwrap();

        assert_eq!(plain, dotted);
    }

    #[test]
    fn image_only_document_untouched_by_first_three_passes() {
        let site = Site::new();
        site.write("pic.png", PNG_DATA);
        let html = "<p>hi</p><img alt=\"x\" src=\"pic.png\" width=\"10\">";

        let mut session = session();
        let after_styles = inline_stylesheets(&mut session, html, site.path()).unwrap();
        let after_scripts = inline_scripts(&mut session, &after_styles, site.path()).unwrap();
        let after_icons = inline_icons(&mut session, &after_scripts, site.path()).unwrap();
        assert_eq!(after_icons, html);

        let result = create_single_file_document(&mut session, html, site.path()).unwrap();
        assert_eq!(
            result,
            format!("<p>hi</p><img alt=\"x\" src=\"{}\" width=\"10\">", PNG_DATA_URL)
        );
    }

    #[test]
    fn repeated_references_are_each_inlined() {
        let site = Site::new();
        site.write("pic.png", PNG_DATA);
        let html = "<img src=\"pic.png\"><img src=\"./pic.png\">";

        let expected = format!("<img src=\"{0}\"><img src=\"{0}\">", PNG_DATA_URL);

        let uncached = create_single_file_document(&mut session(), html, site.path()).unwrap();
        let mut cached_session = Session::new(BundleOptions { cache_assets: true });
        let cached = create_single_file_document(&mut cached_session, html, site.path()).unwrap();

        assert_eq!(uncached, expected);
        assert_eq!(cached, expected);
    }

    #[test]
    fn icon_and_image_data_urls_are_left_alone() {
        let site = Site::new();
        let html = format!(
            "<link rel=\"icon\" href=\"{}\"><img src=\"{}\">",
            ICO_DATA_URL, PNG_DATA_URL
        );

        let result = create_single_file_document(&mut session(), &html, site.path()).unwrap();

        assert_eq!(result, html);
    }

    #[test]
    fn multiline_tags_and_mixed_case() {
        let site = Site::new();
        site.write("f.ico", ICO_DATA);
        site.write("app.js", "run();");
        let html = "<LINK\n  REL=\"icon\"\n  HREF=\"f.ico\">\n<Script Src='app.js'></SCRIPT>";

        let result = create_single_file_document(&mut session(), html, site.path()).unwrap();

        assert_eq!(
            result,
            format!(
                "<LINK\n  REL=\"icon\"\n  HREF=\"{}\">\n<script>\nrun();\n</script>",
                ICO_DATA_URL
            )
        );
    }

    #[test]
    fn inlined_text_is_seen_by_later_passes() {
        // Pattern matching is textual: markup inside an inlined script body
        // is rewritten by the image pass
        let site = Site::new();
        site.write("pic.png", PNG_DATA);
        site.write("b.js", "el.innerHTML = '<img src=\"pic.png\">';");

        let result = create_single_file_document(
            &mut session(),
            "<script src=\"b.js\"></script>",
            site.path(),
        )
        .unwrap();

        assert_eq!(
            result,
            format!(
                "<script>\nel.innerHTML = '<img src=\"{}\">';\n</script>",
                PNG_DATA_URL
            )
        );
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use single_html::core::{create_single_file_document, BundleError, BundleOptions};
    use single_html::session::Session;

    use crate::common::Site;

    #[test]
    fn only_dot_slash_prefix_is_stripped() {
        let site = Site::new();
        site.write("app/style.css", "p {}");

        let result = create_single_file_document(
            &mut Session::new(BundleOptions::default()),
            "<link rel=\"stylesheet\" href=\"../style.css\">",
            &site.file("app"),
        );

        match result {
            Err(BundleError::ReadText { path, .. }) => {
                assert_eq!(path, site.file("app").join("../style.css"))
            }
            other => panic!("expected ReadText, got {:?}", other),
        }
    }

    #[test]
    fn icon_is_a_directory() {
        let site = Site::new();
        std::fs::create_dir(site.file("icons")).unwrap();

        let result = create_single_file_document(
            &mut Session::new(BundleOptions::default()),
            "<link rel=\"icon\" href=\"icons\">",
            site.path(),
        );

        assert!(matches!(result, Err(BundleError::ReadBytes { .. })));
    }

    #[test]
    fn remote_stylesheet_is_read_as_local_file() {
        let site = Site::new();

        let result = create_single_file_document(
            &mut Session::new(BundleOptions::default()),
            "<link rel=\"stylesheet\" href=\"https://cdn.example.com/a.css\">",
            site.path(),
        );

        match result {
            Err(BundleError::ReadText { path, .. }) => {
                assert_eq!(path, site.file("https://cdn.example.com/a.css"))
            }
            other => panic!("expected ReadText, got {:?}", other),
        }
    }

    #[test]
    fn remote_image_is_read_as_local_file() {
        let site = Site::new();

        let result = create_single_file_document(
            &mut Session::new(BundleOptions::default()),
            "<img src=\"http://example.com/c.png\">",
            site.path(),
        );

        match result {
            Err(BundleError::ReadBytes { path, .. }) => {
                assert_eq!(path, site.file("http://example.com/c.png"))
            }
            other => panic!("expected ReadBytes, got {:?}", other),
        }
    }
}
