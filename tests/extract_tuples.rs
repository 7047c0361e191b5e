use sqldump_tuple_parser::{Diagnostic, TupleExtractor, extract_tuples};

fn texts<'a>(sql: &'a str, table: &str) -> Vec<&'a str> {
    extract_tuples(sql, table).iter().map(|t| t.text).collect()
}

#[test]
fn two_tuple_statement_strips_parentheses() {
    let sql = "INSERT INTO `wp_posts` VALUES (1,'x'),(2,'y');";
    assert_eq!(texts(sql, "wp_posts"), vec!["1,'x'", "2,'y'"]);
}

#[test]
fn header_with_column_list_and_newlines() {
    let sql = "INSERT INTO `wp_posts` (`ID`, `post_title`)\nVALUES\n(1,'x'),\n(2,'y');\n";
    assert_eq!(texts(sql, "wp_posts"), vec!["1,'x'", "2,'y'"]);
}

#[test]
fn separators_between_tuples() {
    let sql = "INSERT INTO `t` VALUES\r\n\t(1) ,\r\n\t(2),,(3)\n;";
    assert_eq!(texts(sql, "t"), vec!["1", "2", "3"]);
}

#[test]
fn inner_text_is_verbatim() {
    let sql = "INSERT INTO `t` VALUES ( 1 , 'a\\'b' , NULL );";
    assert_eq!(texts(sql, "t"), vec![" 1 , 'a\\'b' , NULL "]);
}

#[test]
fn unbalanced_region_yields_zero_tuples() {
    let sql = "INSERT INTO `t` VALUES (1,'x';";
    let ex = TupleExtractor::for_table("t").extract(sql);
    assert!(ex.tuples.is_empty());
    assert!(matches!(ex.diagnostics.as_slice(), [Diagnostic::UnbalancedTuple { .. }]));
}

#[test]
fn order_is_preserved_across_statements() {
    let sql = "\
-- dump
CREATE TABLE `wp_posts` (`ID` int);
INSERT INTO `wp_posts` VALUES (1,'a'),(2,'b');
INSERT INTO `wp_users` VALUES (99,'admin');
INSERT INTO `wp_posts` VALUES (3,'c');
INSERT INTO `wp_posts` VALUES (4,'d'),(5,'e');
";
    let ids: Vec<&str> = texts(sql, "wp_posts")
        .into_iter()
        .map(|t| &t[..1])
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(texts(sql, "wp_users"), vec!["99,'admin'"]);
}

#[test]
fn other_tables_and_case_are_not_matched() {
    let sql = "INSERT INTO `wp_postmeta` VALUES (1);insert into `wp_posts` values (2);";
    assert!(texts(sql, "wp_posts").is_empty());
}

#[test]
fn header_without_values_is_ignored() {
    let sql = "INSERT INTO `t` SELECT * FROM `u`;";
    let ex = TupleExtractor::for_table("t").extract(sql);
    assert!(ex.tuples.is_empty());
    assert!(ex.is_clean());
}

#[test]
fn bad_statement_does_not_affect_the_next() {
    let sql = "INSERT INTO `t` VALUES (1,(2;\nINSERT INTO `t` VALUES (3);";
    let ex = TupleExtractor::for_table("t").extract(sql);
    assert_eq!(ex.texts(), vec!["3"]);
    assert_eq!(ex.diagnostics.len(), 1);
}

#[test]
fn empty_input() {
    assert!(extract_tuples("", "t").is_empty());
    assert!(extract_tuples("INSERT INTO `t` VALUES ;", "t").is_empty());
}
