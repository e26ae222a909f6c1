//! Build a small word graph and run every traversal over it.

use graph_walk::*;

fn main() -> WalkResult<()> {
    // cat -> elephant -> dog -> cat, cat -> ox, dog -> dog
    let mut builder: GraphBuilder<String> = GraphBuilder::new();
    let cat = builder.add("cat");
    let elephant = builder.add("elephant");
    let dog = builder.add("dog");
    let ox = builder.add("ox");
    builder
        .link(cat, elephant)
        .link(elephant, dog)
        .link(dog, cat)
        .link(dog, dog)
        .link(cat, ox);
    let graph = builder.build()?;

    println!("Words shorter than 4 reachable from cat:");
    let mut sink = LineSink::stdout();
    print_short_words(&graph, Some(cat), 4, &mut sink);
    sink.finish()?;

    println!("Longest word: {}", longest_word(&graph, Some(cat)));

    println!("Self-loopers:");
    let mut sink = LineSink::stdout();
    print_self_loopers(&graph, Some(cat), &mut sink);
    sink.finish()?;

    // Flights
    let routes = MapGraph::from_json_str(r#"{"JFK": ["ORD"], "ORD": ["JFK"], "LAX": ["JFK"]}"#)?;
    let network = FlightNetwork::from_routes(&routes)?;
    let (jfk, lax) = (network.find("JFK"), network.find("LAX"));
    println!("JFK -> JFK: {}", can_reach(&network, jfk, jfk));
    println!("JFK -> LAX: {}", can_reach(&network, jfk, lax));
    println!("LAX -> JFK: {}", can_reach(&network, lax, jfk));

    // Map graph
    let letters: MapGraph<char> = [('A', vec!['B']), ('B', vec![]), ('C', vec![])]
        .into_iter()
        .collect();
    let mut missing: Vec<char> = unreachable(Some(&letters), Some(&'A')).into_iter().collect();
    missing.sort();
    println!("Unreachable from A: {:?}", missing);

    Ok(())
}
