//! Local host collector.
//!
//! Reports facts about the machine running the tool plus its public address.
//! Each fact is best-effort: anything that cannot be determined is left out
//! instead of failing the call.

use std::net::{IpAddr, UdpSocket};

use serde::Deserialize;
use url::Url;

use crate::fetch::LookupContext;
use crate::results::ResultList;

/// Public IP discovery response (`{"ip": "..."}`).
#[derive(Debug, Deserialize)]
struct PublicIpResponse {
    ip: String,
}

fn username() -> Option<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|name| !name.is_empty())
}

fn device_name() -> Option<String> {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Extracts the first `model name` from `/proc/cpuinfo` content.
fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == "model name").then(|| value.trim().to_string())
    })
}

/// Extracts `MemTotal` (in kB) from `/proc/meminfo` content.
fn parse_mem_total_kb(meminfo: &str) -> Option<u64> {
    meminfo.lines().find_map(|line| {
        let rest = line.strip_prefix("MemTotal:")?;
        rest.split_whitespace().next()?.parse().ok()
    })
}

fn format_memory(kb: u64) -> String {
    format!("{:.2} GB", kb as f64 / 1024.0 / 1024.0)
}

fn cpu_model() -> Option<String> {
    let cpuinfo = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    parse_cpu_model(&cpuinfo)
}

fn total_memory() -> Option<String> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_mem_total_kb(&meminfo).map(format_memory)
}

fn os_description() -> String {
    match std::fs::read_to_string("/proc/sys/kernel/osrelease") {
        Ok(release) => format!("{} {}", std::env::consts::OS, release.trim()),
        Err(_) => std::env::consts::OS.to_string(),
    }
}

/// Finds the address of the interface used for outbound traffic.
///
/// Connecting a UDP socket only selects a route; nothing is sent.
fn private_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

async fn public_ip(ctx: &LookupContext) -> Option<String> {
    let url = match Url::parse(&ctx.endpoints.public_ip) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Invalid public IP endpoint {}: {}", ctx.endpoints.public_ip, e);
            return None;
        }
    };
    match ctx.fetch_json::<PublicIpResponse>(url, Default::default()).await {
        Ok(response) => Some(response.ip),
        Err(e) => {
            log::warn!("Cannot find public IP address: {}", e);
            None
        }
    }
}

/// Collects host facts: Username, Device Name, CPU, OS, Total Memory,
/// Private IP Address and Public IP Address, in that order.
pub async fn lookup_host(ctx: &LookupContext) -> ResultList {
    let mut results = ResultList::new();

    if let Some(user) = username() {
        results.push("Username", user);
    }
    if let Some(name) = device_name() {
        results.push("Device Name", name);
    }
    if let Some(cpu) = cpu_model() {
        results.push("CPU", cpu);
    }
    results.push("OS", os_description());
    if let Some(memory) = total_memory() {
        results.push("Total Memory", memory);
    }
    if let Some(ip) = private_ip() {
        results.push("Private IP Address", ip.to_string());
    }
    if let Some(ip) = public_ip(ctx).await {
        results.push("Public IP Address", ip);
    }

    results
}
