//! Built-in HTML tag catalogs and attribute configuration

/// Attribute configuration shared by the HTML dialects: void and
/// require-end tag sets, tag-scoped boolean attributes, class-token
/// merging, and the `xml_`/`class_` caller-name rewrites.
pub const HTML_CONFIG: &str = r#"
[tags]
void = [
  "area",
  "base",
  "basefont",
  "br",
  "col",
  "frame",
  "hr",
  "img",
  "input",
  "isindex",
  "link",
  "meta",
  "param",
]
require_end = ["script", "textarea", "span", "div"]

[attributes]
class_union = ["class"]
boolean = [
  ["fieldset", "disabled"],
  ["button", "disabled"],
  ["input", "checked"],
  ["input", "required"],
  ["input", "multiple"],
  ["input", "disabled"],
  ["input", "readonly"],
  ["option", "selected"],
  ["select", "required"],
  ["select", "multiple"],
]

[[rename]]
prefixes = ["xml", "xmlns"]
separator = ":"

[[rename]]
from = "class_"
to = "class"
"#;

/// HTML 4.01 tag catalog
pub const HTML_TEMPLATE: &str = r#"<template>
    <a href="#"/>
    <abbr/>
    <acronym/>
    <address/>
    <applet/>
    <area/>
    <b/>
    <base/>
    <basefont/>
    <bdo/>
    <big/>
    <blockquote/>
    <body/>
    <br/>
    <button/>
    <caption/>
    <center/>
    <cite/>
    <code/>
    <col/>
    <colgroup/>
    <dd/>
    <del/>
    <dfn/>
    <dir/>
    <div/>
    <dl/>
    <dt/>
    <em/>
    <fieldset/>
    <font/>
    <footer/>
    <form/>
    <frame/>
    <frameset/>
    <h1/>
    <h2/>
    <h3/>
    <h4/>
    <h5/>
    <h6/>
    <head/>
    <hr/>
    <html/>
    <i/>
    <iframe/>
    <img/>
    <input/>
    <ins/>
    <kbd/>
    <label/>
    <legend/>
    <li/>
    <link/>
    <map/>
    <menu/>
    <meta/>
    <noframes/>
    <noscript/>
    <object/>
    <ol/>
    <optgroup/>
    <option/>
    <p/>
    <param/>
    <pre/>
    <q/>
    <s/>
    <samp/>
    <script/>
    <select/>
    <small/>
    <span/>
    <strike/>
    <strong/>
    <style/>
    <sub/>
    <sup/>
    <table/>
    <tbody/>
    <td/>
    <textarea/>
    <tfoot/>
    <th/>
    <thead/>
    <title/>
    <tr/>
    <tt/>
    <u/>
    <ul/>
    <var/>
</template>"#;

/// HTML5 tag catalog
pub const HTML5_TEMPLATE: &str = r#"<template>
    <a href="#"/>
    <abbr/>
    <address/>
    <area/>
    <article/>
    <aside/>
    <audio/>
    <b/>
    <base/>
    <bdi/>
    <bdo/>
    <blockquote/>
    <body/>
    <br/>
    <button/>
    <canvas/>
    <caption/>
    <cite/>
    <code/>
    <col/>
    <colgroup/>
    <datalist/>
    <dd/>
    <del/>
    <details/>
    <dfn/>
    <dialog/>
    <div/>
    <dl/>
    <dt/>
    <em/>
    <embed/>
    <fieldset/>
    <figcaption/>
    <figure/>
    <footer/>
    <form/>
    <h1/>
    <h2/>
    <h3/>
    <h4/>
    <h5/>
    <h6/>
    <head/>
    <header/>
    <hgroup/>
    <hr/>
    <html/>
    <i/>
    <iframe/>
    <img/>
    <input/>
    <ins/>
    <kbd/>
    <keygen/>
    <label/>
    <legend/>
    <li/>
    <link/>
    <main/>
    <map/>
    <mark/>
    <menu/>
    <menuitem/>
    <meta/>
    <meter/>
    <nav/>
    <noscript/>
    <object/>
    <ol/>
    <optgroup/>
    <option/>
    <output/>
    <p/>
    <param/>
    <pre/>
    <progress/>
    <q/>
    <rp/>
    <rt/>
    <ruby/>
    <s/>
    <samp/>
    <script/>
    <section/>
    <select/>
    <small/>
    <source/>
    <span/>
    <strong/>
    <style/>
    <sub/>
    <summary/>
    <sup/>
    <table/>
    <tbody/>
    <td/>
    <textarea/>
    <tfoot/>
    <th/>
    <thead/>
    <time/>
    <title/>
    <tr/>
    <track/>
    <u/>
    <ul/>
    <var/>
    <video/>
    <wbr/>
</template>"#;
