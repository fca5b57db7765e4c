//! Basic usage example for rs-opengraph.
//!
//! Run with: `cargo run --example basic`

use rs_opengraph::{parse_with_intent, Intent};

fn main() -> Result<(), rs_opengraph::Error> {
    let html = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Breaking: Major Discovery - Science Daily</title>
            <link rel="icon" href="/favicon.ico">
            <link rel="canonical" href="https://example.com/science/discovery">

            <meta property="og:title" content="Major Discovery in Science">
            <meta property="og:type" content="article">
            <meta property="og:site_name" content="Science Daily">
            <meta property="og:locale" content="en_US">
            <meta property="og:locale:alternate" content="fr_FR">
            <meta property="og:image" content="/images/lab.jpg">
            <meta property="og:image:width" content="1200">
            <meta property="og:image:height" content="630">
            <meta property="og:image:alt" content="A laboratory">
            <meta property="og:video" content="https://example.com/clip.mp4">
            <meta property="og:video:type" content="video/mp4">
        </head>
        <body><article><p>Scientists announce breakthrough findings.</p></article></body>
        </html>
    "#;

    let intent = Intent::new("https://example.com/science/discovery");
    let mut og = parse_with_intent(html, intent)?;
    og.to_absolute_urls();

    println!("Title:      {:?}", og.title);
    println!("Type:       {:?}", og.og_type);
    println!("Site name:  {:?}", og.site_name);
    println!("Locale:     {:?} (+{:?})", og.locale, og.locale_alternate);
    println!("Favicon:    {:?}", og.favicon);
    println!("Canonical:  {:?}", og.canonical_url);

    for image in &og.image {
        println!(
            "Image:      {} ({:?}x{:?}) alt={:?}",
            image.url, image.width, image.height, image.alt
        );
    }
    for video in &og.video {
        println!("Video:      {} type={:?}", video.url, video.mime_type);
    }

    Ok(())
}
