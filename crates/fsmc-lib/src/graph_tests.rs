use crate::{Graph, parse_automaton};

#[test]
fn eps_nfa_edges_fan_out() {
    let automaton =
        parse_automaton("Q={i,f};A={a};I=i;F={f};(i,a)->{i,f};(f,'')->{i};").unwrap();
    let graph = Graph::from(&automaton);

    insta::assert_snapshot!(graph.to_json(true).unwrap(), @r#"
    {
      "kind": "eps-nfa",
      "nodes": [
        {
          "id": "i",
          "initial": true,
          "accepting": false
        },
        {
          "id": "f",
          "initial": false,
          "accepting": true
        }
      ],
      "edges": [
        {
          "from": "i",
          "symbol": "a",
          "to": "f"
        },
        {
          "from": "i",
          "symbol": "a",
          "to": "i"
        },
        {
          "from": "f",
          "symbol": null,
          "to": "i"
        }
      ]
    }
    "#);
}

#[test]
fn dfa_has_one_edge_per_transition() {
    let automaton = parse_automaton("Q={p,q};A={0,1};I=p;F={q};(p,0)->q;(p,1)->p;").unwrap();
    let graph = Graph::from(&automaton);

    assert_eq!(graph.edges.len(), 2);
    insta::assert_snapshot!(
        graph.to_json(false).unwrap(),
        @r#"{"kind":"dfa","nodes":[{"id":"p","initial":true,"accepting":false},{"id":"q","initial":false,"accepting":true}],"edges":[{"from":"p","symbol":"0","to":"q"},{"from":"p","symbol":"1","to":"p"}]}"#
    );
}
