use super::*;

#[test]
fn wrapper_always_names_the_variant() {
    assert_eq!(
        TagOptions::new("x").wrapper_class(),
        "blocky-tag-wrapper blocky-gradient blocky-3d default"
    );
    assert_eq!(
        TagOptions::new("x").variant(Variant::Danger).wrapper_class(),
        "blocky-tag-wrapper blocky-gradient blocky-3d danger"
    );
}

#[test]
fn extra_class_goes_on_content() {
    let options = TagOptions::new("x").class_name("pill");
    assert_eq!(options.content_class(), "blocky-tag-content pill");
}

#[test]
fn view_content_is_not_markup() {
    let options = TagOptions::new(Content::view(|| "built"));
    assert!(options.content.as_markup().is_none());
}
