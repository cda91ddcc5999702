//! Scanning of complete Rakefiles
//!
//! Fixture files live under `tests/fixtures/`; small cases are written inline.

use rakedoc::rake::ast::{Document, TaskKind};
use rakedoc::rake::parser::{parse_document, RakeParser};
use rakedoc::rake::stats::Stats;
use rakedoc::rake::testing::assert_doc;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scan_fixture(name: &str, stats: &mut Stats) -> Document {
    let path = fixture_path(name);
    let source = fs::read_to_string(&path).expect("Failed to read fixture");
    RakeParser::new(name, source).scan(stats)
}

#[test]
fn test_project_rakefile() {
    let mut stats = Stats::new();
    let doc = scan_fixture("Rakefile", &mut stats);

    assert_doc(&doc)
        .require_names(&["rake/clean", "rake/testtask", "lib/tasks/helper"])
        .qualified_task_names(&[
            "default",
            "build",
            "prepare",
            "pkg",
            "pkg/app.gem",
            "environment",
            "db:migrate",
            "db:schema:load",
        ])
        .root(|ns| {
            ns.include_names(&["CLEAN", "Rake::TestTask"])
                .namespace_names(&["db"])
                .task(":default", |t| {
                    t.comment("Run the test suite")
                        .dependencies(&["test"])
                        .text("task :default")
                        .line(13);
                })
                .task(":build", |t| {
                    t.comment("Build the gem")
                        .arguments(&["version"])
                        .dependencies(&["prepare"])
                        .has_block(true);
                })
                .task(":prepare", |t| {
                    t.comment("").dependencies(&[]).has_block(false);
                })
                .task("'pkg'", |t| {
                    t.kind(TaskKind::Directory);
                })
                .task("'pkg/app.gem'", |t| {
                    t.kind(TaskKind::File)
                        .dependencies(&["pkg", "app.gemspec"])
                        .text("file 'pkg/app.gem'");
                });
        })
        .namespace(&["db"], |ns| {
            ns.task_names(&[":migrate"])
                .namespace_names(&["schema"])
                .task(":migrate", |t| {
                    t.comment("Migrate the database")
                        .dependencies(&["environment"])
                        .has_block(true);
                });
        })
        .namespace(&["db", "schema"], |ns| {
            ns.task(":load", |t| {
                t.comment("Load the schema").dependencies(&["environment"]);
            });
        });

    assert!(doc.requires[2].relative);
    assert_eq!(stats.files, 1);
    assert_eq!(stats.namespaces, 3);
    assert_eq!(stats.tasks, 8);
}

#[test]
fn test_rake_file_with_reopened_namespace() {
    let doc = scan_fixture("tasks/release.rake", &mut Stats::new());

    assert_doc(&doc)
        .task_count(3)
        .qualified_task_names(&["release:tag", "release:push", "release:announce"])
        .root(|ns| {
            ns.include_names(&["Hoe"])
                .task_names(&[])
                .namespace_names(&["release"]);
        })
        .namespace(&["release"], |ns| {
            ns.task(":tag", |t| {
                t.comment("Tag the release")
                    .arguments(&["version"])
                    .dependencies(&[])
                    .line(12)
                    .has_block(true);
            })
            .task(":push", |t| {
                t.dependencies(&["tag"]).comment("");
            })
            .task(":announce", |t| {
                t.dependencies(&["push"]).comment("Announce the release");
            });
        });
}

#[rstest]
#[case::symbol("task :a => :b\n", &["b"])]
#[case::array("task :a => [:b, :c]\n", &["b", "c"])]
#[case::multiline_array("task :a => [\n  :b,\n  :c\n]\n", &["b", "c"])]
#[case::label("task a: :b\n", &["b"])]
#[case::label_array("task a: [:b, :c]\n", &["b", "c"])]
#[case::with_arguments("task :a, [:x, :y] => :b\n", &["b"])]
#[case::parenthesized("task(:a => :b)\n", &["b"])]
#[case::quoted_symbol("task :a => :\"b\"\n", &["b"])]
#[case::no_dependencies("task :a do\nend\n", &[])]
#[case::method_call_dependency("task :a => deps\n", &[])]
#[case::string_dependency_on_plain_task("task :a => 'b'\n", &[])]
fn test_dependency_forms(#[case] source: &str, #[case] expected: &[&str]) {
    let doc = parse_document(source);
    assert_doc(&doc).task_count(1).root(|ns| {
        ns.task(":a", |t| {
            t.dependencies(expected);
        });
    });
}

#[rstest]
#[case::symbol("task :name\n", ":name")]
#[case::double_quoted("task \"name\"\n", "\"name\"")]
#[case::single_quoted("task 'name'\n", "'name'")]
#[case::quoted_symbol("task :\"name\"\n", ":\"name\"")]
#[case::single_quoted_symbol("task :'name'\n", ":'name'")]
#[case::label("task name: []\n", ":name")]
fn test_task_name_forms(#[case] source: &str, #[case] written: &str) {
    let doc = parse_document(source);
    assert_doc(&doc)
        .qualified_task_names(&["name"])
        .root(|ns| {
            ns.task_names(&[written]);
        });
}

#[rstest]
#[case::if_block("if x\n  task :inner\nend\n")]
#[case::unless_block("unless x\n  task :inner\nend\n")]
#[case::case_block("case x\nwhen 1\n  task :inner\nend\n")]
#[case::each_block("[1, 2].each do |i|\n  task :inner\nend\n")]
#[case::begin_block("begin\n  task :inner\nrescue\nend\n")]
#[case::while_loop("while x do\n  task :inner\nend\n")]
fn test_blocks_inside_namespace(#[case] block: &str) {
    let source = format!("namespace :n do\n{}  task :last\nend\ntask :outside\n", block);
    let doc = parse_document(&source);

    assert_doc(&doc)
        .qualified_task_names(&["outside", "n:inner", "n:last"])
        .namespace(&["n"], |ns| {
            ns.task_names(&[":inner", ":last"]);
        });
}

#[rstest]
#[case::end_of_script("task :a\n__END__\ntask :b\n")]
#[case::enddoc("task :a\n# :enddoc:\ntask :b\n")]
#[case::enddoc_in_namespace("task :a\nnamespace :n do\n  # :enddoc:\n  task :b\nend\n")]
fn test_scan_stops_early(#[case] source: &str) {
    let doc = parse_document(source);
    assert_doc(&doc).task_count(1).root(|ns| {
        ns.task_names(&[":a"]);
    });
}

#[test]
fn test_end_marker_inside_line_is_not_end_of_script() {
    let doc = parse_document("task :a => :__END__\nputs __END__\ntask :b\n");
    assert_doc(&doc).task_count(2);
}

#[test]
fn test_scanning_is_idempotent() {
    let source = fs::read_to_string(fixture_path("Rakefile")).expect("Failed to read fixture");
    let parser = RakeParser::new("Rakefile", source);

    let first = parser.scan(&mut Stats::new());
    let second = parser.scan(&mut Stats::new());
    assert_eq!(first, second);
}
