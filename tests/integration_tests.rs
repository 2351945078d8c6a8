//! Integration tests for the tagwright writer

use tagwright::flavor::doctypes;
use tagwright::{Flavor, SerializeOptions, TagArgs, WriteError, Writer};

fn body_only(writer: &mut Writer) -> String {
    writer
        .get_value_with(&SerializeOptions::new().without_root_tag())
        .unwrap()
}

#[test]
fn test_minimal_html5_document() {
    let mut doc = Writer::document(Flavor::html5().shared());
    assert_eq!(doc.get_value().unwrap(), "<!DOCTYPE html>\n<html></html>");
}

#[test]
fn test_fire_and_forget_calls_commit_in_order() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke("p", TagArgs::text("x")).unwrap();
    doc.invoke("p", TagArgs::text("y")).unwrap();
    assert_eq!(body_only(&mut doc), "<p>x</p><p>y</p>");
}

#[test]
fn test_html5_void_tag_sealed_bare() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke("br", TagArgs::new()).unwrap();
    assert_eq!(body_only(&mut doc), "<br>");
}

#[test]
fn test_xhtml_empty_elements_self_close() {
    let mut doc = Writer::document(Flavor::xhtml().shared());
    doc.invoke("br", TagArgs::new()).unwrap();
    doc.invoke("img", TagArgs::new().attr("src", "x.png")).unwrap();
    assert_eq!(body_only(&mut doc), r#"<br/><img src="x.png"/>"#);
}

#[test]
fn test_require_end_tag_never_self_closes() {
    let mut doc = Writer::document(Flavor::html5().shared());
    let span = doc.invoke("span", TagArgs::new()).unwrap();
    doc.scoped(span, |_| Ok(())).unwrap();
    assert_eq!(body_only(&mut doc), "<span></span>");
}

#[test]
fn test_void_tag_rejects_content() {
    let mut doc = Writer::document(Flavor::html5().shared());
    let br = doc.invoke("br", TagArgs::new()).unwrap();
    let err = doc.scoped(br, |w| w.write_escaped("nope")).unwrap_err();
    assert!(matches!(err, WriteError::VoidContent { .. }));
}

#[test]
fn test_nested_scopes_follow_call_nesting() {
    let mut doc = Writer::document(Flavor::html5().shared());
    let body = doc.invoke("body", TagArgs::new()).unwrap();
    doc.scoped(body, |w| {
        let ul = w.invoke("ul", TagArgs::new())?;
        w.scoped(ul, |w| {
            w.invoke("li", TagArgs::text("one"))?;
            w.invoke("li", TagArgs::text("two")).map(|_| ())
        })
    })
    .unwrap();
    assert_eq!(
        body_only(&mut doc),
        "<body><ul><li>one</li><li>two</li></ul></body>"
    );
}

#[test]
fn test_escaped_and_raw_writes() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.write_escaped("a<b>c").unwrap();
    doc.write_raw("a<b>c").unwrap();
    assert_eq!(body_only(&mut doc), "a&lt;b&gt;ca<b>c");
}

#[test]
fn test_comment_and_cdata() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.write_comment(" header ").unwrap();
    doc.write_cdata("x < y").unwrap();
    assert_eq!(body_only(&mut doc), "<!-- header --><![CDATA[x < y]]>");
}

#[test]
fn test_writer_survives_call_site_error() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke("p", TagArgs::text("ok")).unwrap();
    assert!(matches!(
        doc.write_comment("bad --> bad"),
        Err(WriteError::CommentTerminator)
    ));
    // Failed call left the buffer alone; the pending tag still commits
    doc.invoke("p", TagArgs::text("more")).unwrap();
    assert_eq!(body_only(&mut doc), "<p>ok</p><p>more</p>");
}

#[test]
fn test_boolean_attribute_rendering() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke(
        "input",
        TagArgs::new().attr("type", "checkbox").attr("checked", true),
    )
    .unwrap();
    doc.invoke(
        "input",
        TagArgs::new().attr("type", "checkbox").attr("checked", false),
    )
    .unwrap();
    assert_eq!(
        body_only(&mut doc),
        r#"<input type="checkbox" checked><input type="checkbox">"#
    );
}

#[test]
fn test_class_union_between_builder_and_caller() {
    let mut doc = Writer::document(Flavor::bootstrap().shared());
    doc.invoke("bs_lead", TagArgs::text("x").attr("class", "text-center"))
        .unwrap();
    assert_eq!(body_only(&mut doc), r#"<p class="lead text-center">x</p>"#);
}

#[test]
fn test_attribute_rename_on_call() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke(
        "div",
        TagArgs::new()
            .attr("data_toggle", "modal")
            .attr("aria_hidden", "true"),
    )
    .unwrap();
    assert_eq!(
        body_only(&mut doc),
        r#"<div data-toggle="modal" aria-hidden="true"></div>"#
    );
}

#[test]
fn test_root_attributes_and_doctype() {
    let mut doc =
        Writer::document(Flavor::html5().shared()).with_root_attribute("lang", "en");
    doc.invoke("body", TagArgs::new()).unwrap();
    assert_eq!(
        doc.get_value().unwrap(),
        "<!DOCTYPE html>\n<html lang=\"en\"><body></body></html>"
    );
}

#[test]
fn test_doctype_override_per_call() {
    let mut doc = Writer::document(Flavor::html().shared());
    assert_eq!(doc.get_value().unwrap(), "<html></html>");
    assert_eq!(
        doc.get_value_with(&SerializeOptions::new().with_doctype(doctypes::HTML_4_01_STRICT))
            .unwrap(),
        format!("{}\n<html></html>", doctypes::HTML_4_01_STRICT)
    );
}

#[test]
fn test_explicit_doctype_must_be_well_formed() {
    let result = Writer::document(Flavor::html().shared()).with_doctype("html");
    assert!(matches!(result, Err(WriteError::InvalidDoctype { .. })));
    let result =
        Writer::document(Flavor::html().shared()).with_doctype(doctypes::XHTML_1_1);
    assert!(result.is_ok());
}

#[test]
fn test_xml_flavor_with_declaration() {
    let mut doc = Writer::new(Flavor::xml().shared(), "feed")
        .with_declaration(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
        .with_root_attribute("xmlns_atom", "http://www.w3.org/2005/Atom");
    doc.tag_with("entry", TagArgs::text("hi")).unwrap();
    assert_eq!(
        doc.get_value().unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<feed xmlns:atom=\"http://www.w3.org/2005/Atom\"><entry>hi</entry></feed>"
    );
}

#[test]
fn test_get_value_flushes_and_writer_stays_usable() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke("hr", TagArgs::new()).unwrap();
    assert_eq!(body_only(&mut doc), "<hr>");
    let section = doc.invoke("section", TagArgs::new()).unwrap();
    doc.scoped(section, |w| w.write_escaped("late")).unwrap();
    assert_eq!(body_only(&mut doc), "<hr><section>late</section>");
}

#[test]
fn test_unknown_builder_is_an_error() {
    let mut doc = Writer::document(Flavor::html().shared());
    // article arrived in HTML5; the 4.01 catalog has no such builder
    assert!(matches!(
        doc.invoke("article", TagArgs::new()),
        Err(WriteError::UnknownBuilder { .. })
    ));
}

#[test]
fn test_attribute_value_shapes() {
    let mut doc = Writer::document(Flavor::html5().shared());
    doc.invoke(
        "td",
        TagArgs::new()
            .attr("colspan", 2)
            .attr("data_ratio", 0.5)
            .attr("class", &["wide", "tall"][..]),
    )
    .unwrap();
    assert_eq!(
        body_only(&mut doc),
        r#"<td colspan="2" data-ratio="0.5" class="tall wide"/>"#
    );
}
