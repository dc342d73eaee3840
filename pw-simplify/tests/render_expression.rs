use pretty_assertions::assert_eq;
use pw_simplify::{
    error::kind::UnknownName,
    render_expression,
    Error,
    RenderCache,
    RenderOptions,
    RenderOptionsBuilder,
};
use std::collections::HashMap;

/// A cache that counts its insertions.
#[derive(Default)]
struct CountingCache {
    entries: HashMap<String, String>,
    inserts: usize,
}

impl RenderCache for CountingCache {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: String, value: String) {
        self.inserts += 1;
        self.entries.insert(key, value);
    }
}

fn render_plain(input: &str) -> String {
    render_expression(input, &RenderOptions::default(), &mut HashMap::new()).unwrap()
}

#[test]
fn simplified_output() {
    assert_eq!(render_plain("2+3"), "5");
    assert_eq!(render_plain("x*0"), "0");
    assert_eq!(render_plain("x*1"), "x");
    assert_eq!(render_plain("x-0"), "x");
    assert_eq!(render_plain("pow(pow(x,2),3)"), "{x}^{6}");
    assert_eq!(render_plain("if_func(a>b,c,c)"), "c");
    assert_eq!(render_plain("x/0"), "\\frac{x}{0}");
    assert_eq!(render_plain("Infinity"), "\\infty ");
    assert_eq!(render_plain("point(1,2)+point(3,4)"), "\\left(4,6\\right)");
}

#[test]
fn signed_terms_keep_their_value() {
    assert_eq!(render_plain("a+(-b-c)"), "a+\\left(-b-c\\right)");
    assert_eq!(render_plain("a-(b-c)"), "a-\\left(b-c\\right)");
    assert_eq!(render_plain("a+-b"), "a-b");
}

#[test]
fn products_with_names_are_not_numbers() {
    assert_eq!(render_plain("pow(2e3,2)"), "{2e3}^{2}");
    assert_eq!(render_plain("2e3==2000"), "\\left\\{2e3=2000,0\\right\\}");
}

#[test]
fn logical_absorption() {
    assert_eq!(render_plain("1|x"), "1");
    assert_eq!(render_plain("x&0"), "0");
    assert_eq!(render_plain("if_func(0,a,b)"), render_plain("b"));
}

#[test]
fn typeset_relation() {
    let options = RenderOptionsBuilder::new().typeset(true).build();
    assert_eq!(
        render_expression("lte(a,b)", &options, &mut HashMap::new()).unwrap(),
        "\\left\\{a\\le b,0\\right\\}",
    );
}

#[test]
fn cache_hit_skips_insert() {
    let options = RenderOptions::default();
    let mut cache = CountingCache::default();

    let first = render_expression("x*1+y", &options, &mut cache).unwrap();
    let second = render_expression("x*1+y", &options, &mut cache).unwrap();

    assert_eq!(first, "x+y");
    assert_eq!(first, second);
    assert_eq!(cache.inserts, 1);
}

#[test]
fn cache_keeps_modes_apart() {
    let mut cache = HashMap::new();
    let partial = RenderOptionsBuilder::new().partial_simplify(true).build();

    assert_eq!(render_expression("a+b*c", &partial, &mut cache).unwrap(), "(a)+((b)*(c))");
    assert_eq!(render_expression("a+b*c", &RenderOptions::default(), &mut cache).unwrap(), "a+bc");
    assert_eq!(cache.len(), 2);
}

#[test]
fn partial_calls_hit_their_own_entries() {
    let partial = RenderOptionsBuilder::new().partial_simplify(true).build();
    let mut cache = CountingCache::default();

    let first = render_expression("a*1", &partial, &mut cache).unwrap();
    let second = render_expression("a*1", &partial, &mut cache).unwrap();
    assert_eq!(first, "a");
    assert_eq!(first, second);
    assert_eq!(cache.inserts, 1);

    render_expression("a*1", &RenderOptions::default(), &mut cache).unwrap();
    assert_eq!(cache.inserts, 2);
}

#[test]
fn partial_output_is_stable() {
    let partial = RenderOptionsBuilder::new().partial_simplify(true).build();
    let once = render_expression("if_func(x|1, a*1, b)+c", &partial, &mut HashMap::new()).unwrap();
    let twice = render_expression(&once, &partial, &mut HashMap::new()).unwrap();

    assert_eq!(once, "(a)+(c)");
    assert_eq!(once, twice);
}

#[test]
fn failed_render_is_not_cached() {
    let options = RenderOptionsBuilder::new().strict(true).known_name("x").build();
    let mut cache = CountingCache::default();

    let err = render_expression("x + y", &options, &mut cache).unwrap_err();
    assert_eq!(err.spans(), [4..5]);
    assert!(matches!(&err, Error::Render(err) if err.downcast_kind::<UnknownName>().is_some()));
    assert_eq!(cache.inserts, 0);
}

#[test]
fn parse_errors() {
    let err = render_expression("x +", &RenderOptions::default(), &mut HashMap::new()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().starts_with("parse error: "));
}

#[test]
fn helper_names_are_known_in_strict_mode() {
    let options = RenderOptionsBuilder::new().strict(true).known_name("a").build();
    assert_eq!(
        render_expression("xor(a,a)", &options, &mut HashMap::new()).unwrap(),
        "xor\\left(a,a\\right)",
    );
}
