//! Document composition, vocabulary shorthands, and the serialization rules
//! the vocabulary relies on.

use markup::{
    Declare, HtmlExt, Node, Session, Style, charset, class, code, content, id, name, nest, node,
    node_opt, render, styled, text, title,
};
use markup_test_support::{assert_markup, build_str};

struct Navigation {
    entries: Vec<(&'static str, &'static str)>,
}

impl Declare<Node> for Navigation {
    fn declare(&self, session: &mut Session<Node>) {
        session.emit("nav", [nest(|t| {
            for (label, target) in &self.entries {
                t.emit("a", [markup::href(*target), text(label)]);
            }
        })]);
    }
}

struct Meta;

impl Declare<Node> for Meta {
    fn declare(&self, session: &mut Session<Node>) {
        session.emit("meta", [charset("UTF-8")]);
        session.emit("meta", [name("viewport"), content("width=device-width")]);
    }
}

#[test]
fn render_declares_one_document() {
    let nav = Navigation {
        entries: vec![("Home", "/"), ("Docs", "/docs")],
    };
    assert_markup(
        &render(&nav),
        "<nav><a href='/'>Home</a><a href='/docs'>Docs</a></nav>",
    );
}

#[test]
fn embedded_documents_compose_in_order() {
    let nav = Navigation {
        entries: vec![("Home", "/")],
    };
    let out = build_str(|t| {
        t.emit("header", [nest(|t| {
            t.embed(&Meta);
            t.embed(&nav);
        })]);
    });
    assert_markup(
        &out,
        "<header><meta charset='UTF-8'/><meta name='viewport' content='width=device-width'/>\
         <nav><a href='/'>Home</a></nav></header>",
    );
}

#[test]
fn embedded_session_does_not_leak_into_the_host_stack() {
    // The embedded declaration nests two levels deep; the host must keep its
    // own attachment point across the embed.
    struct Deep;
    impl Declare<Node> for Deep {
        fn declare(&self, session: &mut Session<Node>) {
            session.emit("outer", [nest(|t| {
                t.emit("inner", []);
            })]);
        }
    }
    let out = build_str(|t| {
        t.emit("host", [nest(|t| {
            t.embed(&Deep);
            t.emit("after", []);
        })]);
    });
    assert_markup(&out, "<host><outer><inner/></outer><after/></host>");
}

#[test]
fn stylesheet_helper_emits_a_link() {
    let out = build_str(|t| t.stylesheet("main.css"));
    assert_markup(&out, "<link rel='stylesheet' href='main.css'/>");
}

#[test]
fn stylesheet_async_emits_preload_and_swap_pair() {
    let out = build_str(|t| t.stylesheet_async("main.css"));
    assert_markup(
        &out,
        "<link rel='preload' href='main.css' as='style' fetchpriority='high'/>\
         <link rel='stylesheet' href='main.css' media='print' onload='this.media=&apos;all&apos;'/>",
    );
}

#[test]
fn script_helpers_emit_script_shapes() {
    let out = build_str(|t| {
        t.script("app.js");
        t.script_async("app.js");
        t.module("app.js");
        t.module_async("app.js");
    });
    assert_markup(
        &out,
        "<script src='app.js'/>\
         <script src='app.js' async='true'/>\
         <script src='app.js' type='module'/>\
         <script src='app.js' async='true' type='module'/>",
    );
}

#[test]
fn styles_contribute_classes_alongside_literal_class_attributes() {
    let accent = Style::named("accent");
    let out = build_str(|t| {
        t.emit("div", [class("card"), styled(&accent)]);
    });
    assert_markup(&out, "<div class='card accent'/>");
}

#[test]
fn prebuilt_nodes_embed_as_children() {
    let mut figure = Node::element("figure");
    figure.append(Node::text("art"));
    let out = build_str(|t| {
        t.emit("div", [node(figure), node_opt(None)]);
    });
    assert_markup(&out, "<div><figure>art</figure></div>");
}

#[test]
fn text_and_attribute_values_escape_markup_characters() {
    let out = build_str(|t| {
        t.emit("p", [title("a < b"), text("x & y")]);
    });
    assert_markup(&out, "<p title='a &lt; b'>x &amp; y</p>");
}

#[test]
fn code_and_id_shorthands_compose() {
    let out = build_str(|t| {
        t.emit("p#intro", [id("lead"), code("fn main() {}")]);
    });
    assert_markup(
        &out,
        "<p id='intro' id='lead'><code>fn main() {}</code></p>",
    );
}

#[test]
fn full_page_composition() {
    let nav = Navigation {
        entries: vec![("Home", "/")],
    };
    let out = build_str(|t| {
        t.emit("html", [nest(|t| {
            t.emit("head", [nest(|t| {
                t.embed(&Meta);
                t.stylesheet("site.css");
                t.module("site.js");
            })]);
            t.emit("body", [nest(|t| {
                t.embed(&nav);
                t.emit("main", [class("content"), nest(|t| {
                    t.emit("h1", [text("Hello")]);
                })]);
            })]);
        })]);
    });
    assert_markup(
        &out,
        "<html><head><meta charset='UTF-8'/>\
         <meta name='viewport' content='width=device-width'/>\
         <link rel='stylesheet' href='site.css'/>\
         <script src='site.js' type='module'/></head>\
         <body><nav><a href='/'>Home</a></nav>\
         <main class='content'><h1>Hello</h1></main></body></html>",
    );
}
