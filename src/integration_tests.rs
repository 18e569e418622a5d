//! End-to-end tests: YAML document -> flat messages -> YAML document

#[cfg(test)]
mod tests {
    use crate::*;

    const RAILS_EN: &str = r#"
en:
  activerecord:
    errors:
      messages:
        too_short:
          one: is too short (minimum is 1 character)
          other: "is too short (minimum is {count} characters)"
        blank: can't be blank
  inbox:
    title: Inbox
    unread:
      zero: No unread messages
      one: "{user}, you have one unread message"
      other: "{user}, you have {count} unread messages"
  footer: Powered by Rails
"#;

    fn rails_doc() -> MessageMap {
        YamlCodec.decode(RAILS_EN.as_bytes()).unwrap()
    }

    #[test]
    fn test_flatten_rails_document() {
        let flat = flatten(&rails_doc()).unwrap();
        let keys: Vec<&str> = flat.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "en.activerecord.errors.messages.too_short",
                "en.activerecord.errors.messages.blank",
                "en.inbox.title",
                "en.inbox.unread",
                "en.footer",
            ]
        );
        assert_eq!(
            flat.get_message("en.activerecord.errors.messages.too_short").unwrap(),
            "{{PLURAL|one=is too short (minimum is 1 character)|is too short (minimum is {count} characters)}}"
        );
        assert_eq!(
            flat.get_message("en.inbox.unread").unwrap(),
            "{{PLURAL|zero=No unread messages|one={user}, you have one unread message|{user}, you have {count} unread messages}}"
        );
    }

    #[test]
    fn test_document_round_trip() {
        let doc = rails_doc();
        let flat = flatten(&doc).unwrap();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let rebuilt = unflatten_with(&flat, &mut sink);
        assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink);
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn test_flat_round_trip() {
        let flat = flatten(&rails_doc()).unwrap();
        assert_eq!(flatten(&unflatten(&flat)).unwrap(), flat);
    }

    #[test]
    fn test_plural_with_other_first_round_trips_semantically() {
        let doc = YamlCodec
            .decode(b"cart:\n  other: '{n} items'\n  one: one item\n")
            .unwrap();
        let flat = flatten(&doc).unwrap();
        assert_eq!(
            flat.get_message("cart").unwrap(),
            "{{PLURAL|one=one item|{n} items}}"
        );
        let rebuilt = unflatten(&flat);
        let cart = rebuilt["cart"].as_mapping().unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart["one"], MessageValue::from("one item"));
        assert_eq!(cart["other"], MessageValue::from("{n} items"));
    }

    #[test]
    fn test_mixed_plural_keys_abort_whole_document() {
        let doc = YamlCodec
            .decode(b"en:\n  ok: fine\n  bad:\n    one: x\n    foo: y\n")
            .unwrap();
        let err = flatten(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Reserved plural keywords mixed with other keys: one, foo."
        );
    }

    #[test]
    fn test_unresolvable_entry_is_dropped_rest_is_kept() {
        let flat: FlatMessages = [
            ("en.a", "{{PLURAL|one=only one}}"),
            ("en.b", "{{PLURAL|one=x|y}}"),
            ("en.c", "plain"),
        ]
        .into_iter()
        .collect();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let doc = unflatten_with(&flat, &mut sink);
        let en = doc["en"].as_mapping().unwrap();
        assert!(en.get("a").is_none());
        assert_eq!(en["b"].as_mapping().unwrap()["other"], MessageValue::from("y"));
        assert_eq!(en["c"], MessageValue::from("plain"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let from_yaml = flatten(&rails_doc()).unwrap();
        let json = JsonCodec.encode(&rails_doc()).unwrap();
        let from_json = flatten(&JsonCodec.decode(&json).unwrap()).unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_empty_other_is_dropped_on_round_trip() {
        let doc = YamlCodec
            .decode(b"en:\n  cart:\n    one: one item\n    other:\n  title: Cart\n")
            .unwrap();
        let flat = flatten(&doc).unwrap();
        assert_eq!(
            flat.get_message("en.cart").unwrap(),
            "{{PLURAL|one=one item|}}"
        );

        let mut sink: Vec<Diagnostic> = Vec::new();
        let rebuilt = unflatten_with(&flat, &mut sink);
        let en = rebuilt["en"].as_mapping().unwrap();
        assert!(en.get("cart").is_none());
        assert_eq!(en["title"], MessageValue::from("Cart"));
        assert_eq!(
            sink,
            vec![Diagnostic::ExpansionFailed(ExpansionError::MissingOther {
                key: "en.cart".to_string()
            })]
        );
    }
}
